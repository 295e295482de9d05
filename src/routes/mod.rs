use crate::utils::webutils::{validate_ops_token, validate_token};
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod auth;
pub mod health;
pub mod invitation;
pub mod ops;
pub mod webhooks;
pub mod workspace;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::bearer(validate_token);
    let ops_auth = HttpAuthentication::bearer(validate_ops_token);

    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/api/auth")
            .service(auth::signup::signup)
            .service(
                web::scope("")
                    .wrap(user_auth.clone())
                    .service(auth::validate::validate)
                    .service(auth::regenerate::regenerate),
            ),
    );

    cfg.service(
        web::scope("/api/workspaces")
            .wrap(user_auth.clone())
            .service(workspace::create::create)
            .service(workspace::list::list)
            .service(workspace::get::get)
            .service(workspace::update::update)
            .service(workspace::delete::delete)
            .service(workspace::leave::leave)
            .service(workspace::member::list::list)
            .service(workspace::member::update::update)
            .service(workspace::member::remove::remove)
            .service(workspace::invite::create::create)
            .service(workspace::invite::list::list)
            .service(workspace::invite::revoke::revoke),
    );

    // token lookup stays public so invitees can preview before logging in
    cfg.service(
        web::scope("/api/invitations")
            .service(invitation::lookup::lookup)
            .service(
                web::scope("")
                    .wrap(user_auth)
                    .service(invitation::accept::accept),
            ),
    );

    cfg.service(web::scope("/api/webhooks").service(webhooks::stripe::stripe_webhook));

    cfg.service(
        web::scope("/api/ops")
            .wrap(ops_auth)
            .service(ops::readiness)
            .service(ops::expire_invitations),
    );
}
