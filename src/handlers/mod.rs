pub mod auth_handlers;
pub mod booth_handlers;
pub mod exhibitor_handlers;
pub mod expo_handlers;
pub mod registration_handlers;
pub mod session_handlers;

use actix_web::web;

/// Register the full API route table. Kept as a `configure` function so
/// integration tests can mount the same routes as `main`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth_handlers::register))
                    .route("/login", web::post().to(auth_handlers::login)),
            )
            .service(
                web::scope("/expos")
                    .route("", web::post().to(expo_handlers::create))
                    .route("", web::get().to(expo_handlers::list))
                    .route("/{id}", web::get().to(expo_handlers::read))
                    .route("/{id}", web::put().to(expo_handlers::update))
                    .route("/{id}", web::delete().to(expo_handlers::delete)),
            )
            .service(
                // Literal segments BEFORE /{id} to avoid routing conflicts
                web::scope("/exhibitors")
                    .route("/apply", web::post().to(exhibitor_handlers::apply))
                    .route("/pending", web::get().to(exhibitor_handlers::pending))
                    .route("/approve/{id}", web::put().to(exhibitor_handlers::approve))
                    .route("/expo/{expo_id}", web::get().to(exhibitor_handlers::by_expo))
                    .route("/user", web::get().to(exhibitor_handlers::by_user))
                    .route("/{id}", web::get().to(exhibitor_handlers::contact)),
            )
            .service(
                web::scope("/booths")
                    .route("", web::post().to(booth_handlers::create_bulk))
                    .route("/available/{expo_id}", web::get().to(booth_handlers::available))
                    .route("/select/{booth_id}", web::put().to(booth_handlers::select))
                    .route("/expo/{expo_id}", web::get().to(booth_handlers::by_expo)),
            )
            .service(
                web::scope("/sessions")
                    .route("", web::post().to(session_handlers::create))
                    .route("/expo/{expo_id}", web::get().to(session_handlers::by_expo))
                    .route("/{id}", web::put().to(session_handlers::update)),
            )
            .service(
                web::scope("/registrations")
                    .route("/expo", web::post().to(registration_handlers::register_expo))
                    .route(
                        "/session",
                        web::post().to(registration_handlers::register_session),
                    )
                    .route("/user", web::get().to(registration_handlers::by_user)),
            ),
    );
}
