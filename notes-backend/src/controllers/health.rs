//! Liveness of the notes store, for load balancers and the client's startup check.

use actix_web::{web, HttpResponse};

use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/health").route(web::get().to(store_health)));
}

/// 200 with the note count while the store answers, 500 once it stops answering
async fn store_health(data: web::Data<AppState>) -> HttpResponse {
    match data.store.count() {
        Ok(notes) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "notes": notes,
            "version": env!("CARGO_PKG_VERSION"),
        })),
        Err(e) => {
            log::error!("[HEALTH] Store unreachable: {}", e);
            let mut body = serde_json::json!({ "status": "unavailable" });
            if data.config.environment.is_development() {
                body["details"] = serde_json::Value::String(e.to_string());
            }
            HttpResponse::InternalServerError().json(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::db::Database;
    use crate::models::NewNoteDocument;
    use crate::notes::NoteStore;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn state_for(db: Database, environment: Environment) -> web::Data<AppState> {
        web::Data::new(AppState {
            store: Arc::new(db),
            config: Config {
                port: 0,
                database_url: ":memory:".to_string(),
                environment,
            },
        })
    }

    #[actix_web::test]
    async fn test_health_counts_stored_notes() {
        let db = Database::open_in_memory().expect("Failed to create store");
        db.insert(NewNoteDocument {
            content: "ping".to_string(),
            important: false,
        })
        .unwrap();

        let state = state_for(db, Environment::Production);
        let app = test::init_service(App::new().app_data(state).configure(config)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["notes"], 1);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_health_is_500_when_store_is_gone() {
        for (environment, expose) in [
            (Environment::Production, false),
            (Environment::Development, true),
        ] {
            let db = Database::open_in_memory().expect("Failed to create store");
            db.conn
                .lock()
                .unwrap()
                .execute_batch("DROP TABLE notes")
                .unwrap();

            let state = state_for(db, environment);
            let app = test::init_service(App::new().app_data(state).configure(config)).await;
            let req = test::TestRequest::get().uri("/api/health").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["status"], "unavailable");
            assert_eq!(body.get("details").is_some(), expose);
        }
    }
}
