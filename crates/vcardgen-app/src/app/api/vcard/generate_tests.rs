//! Unit tests for the vCard generation handler.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
    use salvo::http::{ReqBody, StatusCode};
    use salvo::prelude::*;
    use salvo::test::{ResponseExt, TestClient};

    use crate::app::api::{VCARD_ROUTE_PREFIX, routes};
    use crate::config::{ConfigHandler, LoggingConfig, ServerConfig, Settings, VCardConfig};
    use crate::generator_handler::GeneratorHandler;
    use vcardgen_core::constants::DEFAULT_MAX_REQUEST_BYTES;
    use vcardgen_service::vcard::VCardGenerator;

    const BOUNDARY: &str = "vcardgen-test-boundary";

    fn url() -> String {
        format!("http://127.0.0.1:8699{VCARD_ROUTE_PREFIX}")
    }

    fn service_with(max_request_bytes: u64, vcard: VCardConfig) -> Service {
        let generator = VCardGenerator::from_config(&vcard).unwrap_or_default();
        let settings = Settings {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8699,
                max_request_bytes,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
            vcard,
        };

        let router = Router::new()
            .hoop(ConfigHandler::new(settings))
            .hoop(GeneratorHandler {
                generator: Arc::new(generator),
            })
            .push(routes());
        Service::new(router)
    }

    fn service() -> Service {
        service_with(DEFAULT_MAX_REQUEST_BYTES, VCardConfig::default())
    }

    fn header(res: &salvo::Response, name: salvo::http::header::HeaderName) -> Option<String> {
        res.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    fn multipart_body(fields: &[(&str, &str)], photo: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((mime, bytes)) = photo {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"me.png\"\r\nContent-Type: {mime}\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    #[test_log::test(tokio::test)]
    async fn urlencoded_form_returns_attachment() {
        let mut res = TestClient::post(url())
            .raw_form("name=Jane+Q.+Public&email=jane%40example.com&mobile=%2B1+555+123+4567")
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            header(&res, CONTENT_TYPE).as_deref(),
            Some("text/vcard; charset=UTF-8")
        );
        assert_eq!(
            header(&res, CONTENT_DISPOSITION).as_deref(),
            Some("attachment; filename=\"contact.vcf\"")
        );

        let body = res.take_string().await.unwrap_or_default();
        assert!(body.starts_with("BEGIN:VCARD\r\n"));
        assert!(body.contains("FN:Jane Q. Public\r\n"));
        assert!(body.contains("N:Public;Jane Q.;;;\r\n"));
        assert!(body.contains("EMAIL;TYPE=INTERNET:jane@example.com\r\n"));
        assert!(body.contains("TEL;type=CELL;type=VOICE;type=pref:+15551234567\r\n"));
        assert!(body.ends_with("END:VCARD\r\n"));
    }

    #[test_log::test(tokio::test)]
    async fn invalid_email_returns_422() {
        let mut res = TestClient::post(url())
            .raw_form("name=Jane&email=not-an-email&website=nope")
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert!(
            header(&res, CONTENT_TYPE).is_some_and(|ct| ct.starts_with("application/json"))
        );
        assert_eq!(header(&res, CONTENT_DISPOSITION), None);

        let body: serde_json::Value = res.take_json().await.unwrap_or_default();
        assert_eq!(
            body,
            serde_json::json!({"errors": {"email": "Invalid primary email address"}})
        );
    }

    #[test_log::test(tokio::test)]
    async fn invalid_urls_reported_together() {
        let mut res = TestClient::post(url())
            .raw_form("website=nope&linkedin=also-nope")
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        let body: serde_json::Value = res.take_json().await.unwrap_or_default();
        assert_eq!(body["errors"]["website"], "Invalid website URL");
        assert_eq!(body["errors"]["linkedin"], "Invalid LinkedIn URL");
    }

    #[test_log::test(tokio::test)]
    async fn non_form_body_returns_400() {
        let mut res = TestClient::post(url())
            .add_header("content-type", "application/json", true)
            .body(ReqBody::Once(b"{\"name\":\"Jane\"}".to_vec().into()))
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(header(&res, CONTENT_DISPOSITION), None);
        let body: serde_json::Value = res.take_json().await.unwrap_or_default();
        assert!(body["error"].is_string());
    }

    #[test_log::test(tokio::test)]
    async fn multipart_photo_is_embedded() {
        let body = multipart_body(
            &[("name", "Jane Doe"), ("organization", "Acme, Inc.")],
            Some(("image/png", &b"\x89PNG\r\n\x1a\n"[..])),
        );
        let mut res = TestClient::post(url())
            .add_header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
                true,
            )
            .body(ReqBody::Once(body.into()))
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        let card = res.take_string().await.unwrap_or_default();
        assert!(card.contains("ORG:Acme\\, Inc.\r\n"));
        assert!(card.contains("PHOTO;ENCODING=BASE64;TYPE=PNG:\r\n iVBORw0KGgo=\r\nEND:VCARD\r\n"));
    }

    #[test_log::test(tokio::test)]
    async fn unsupported_photo_type_is_ignored() {
        let body = multipart_body(
            &[("name", "Jane Doe")],
            Some(("application/pdf", &b"%PDF-1.7"[..])),
        );
        let mut res = TestClient::post(url())
            .add_header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
                true,
            )
            .body(ReqBody::Once(body.into()))
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        let card = res.take_string().await.unwrap_or_default();
        assert!(card.contains("FN:Jane Doe\r\n"));
        assert!(!card.contains("PHOTO"));
    }

    #[test_log::test(tokio::test)]
    async fn body_over_request_cap_returns_413() {
        let body = multipart_body(
            &[("name", "Jane Doe")],
            Some(("image/png", &[0x89_u8; 4096][..])),
        );
        let length = body.len();
        let mut res = TestClient::post(url())
            .add_header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
                true,
            )
            .add_header("content-length", length.to_string(), true)
            .body(ReqBody::Once(body.into()))
            .send(&service_with(1024, VCardConfig::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::PAYLOAD_TOO_LARGE));
        assert_eq!(header(&res, CONTENT_DISPOSITION), None);
        let body: serde_json::Value = res.take_json().await.unwrap_or_default();
        assert_eq!(body["error"], "Request body too large");
    }

    #[test_log::test(tokio::test)]
    async fn photo_over_photo_cap_is_dropped_within_request_cap() {
        let vcard = VCardConfig {
            photo_max_bytes: 16,
            ..VCardConfig::default()
        };
        let body = multipart_body(
            &[("name", "Jane Doe")],
            Some(("image/png", &[0x89_u8; 64][..])),
        );
        let length = body.len();
        let mut res = TestClient::post(url())
            .add_header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
                true,
            )
            .add_header("content-length", length.to_string(), true)
            .body(ReqBody::Once(body.into()))
            .send(&service_with(DEFAULT_MAX_REQUEST_BYTES, vcard))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        let card = res.take_string().await.unwrap_or_default();
        assert!(card.contains("FN:Jane Doe\r\n"));
        assert!(!card.contains("PHOTO"));
    }

    #[test_log::test(tokio::test)]
    async fn missing_generator_returns_500() {
        let service = Service::new(Router::new().push(routes()));
        let res = TestClient::post(url())
            .raw_form("name=Jane")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test_log::test(tokio::test)]
    async fn healthcheck_is_ok() {
        let mut res = TestClient::get("http://127.0.0.1:8699/api/app/healthcheck")
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await.unwrap_or_default(), "OK");
    }
}
