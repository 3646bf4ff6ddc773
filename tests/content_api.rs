use std::time::Duration;

use axum::http::StatusCode;
use bytes::Bytes;
use httpmock::MockServer;
use spacebox::application::repos::{
    ApplyOutcome, BlogSource, CareerSource, FetchError, FetchErrorKind, ProjectSource, Resource,
};
use spacebox::config::ContentApiSettings;
use spacebox::domain::careers::{JobApplication, ResumeFile};
use spacebox::infra::content_api::ContentApiClient;

fn client(server: &MockServer) -> ContentApiClient {
    ContentApiClient::new(&ContentApiSettings {
        base_url: server.base_url(),
        request_timeout: Duration::from_secs(5),
    })
    .expect("client should build")
}

fn application() -> JobApplication {
    JobApplication {
        full_name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        message: "I love small apartments.".to_string(),
        resume: ResumeFile {
            file_name: "asha.pdf".to_string(),
            content_type: Some("application/pdf".to_string()),
            bytes: Bytes::from_static(b"%PDF-1.4 resume"),
        },
        job_title: "Junior Designer".to_string(),
    }
}

#[tokio::test]
async fn blog_list_404_keeps_status_and_static_message() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/get_blog_list/");
        then.status(404).body("<html>not here</html>");
    });

    let err = client(&server)
        .fetch_blog_list()
        .await
        .expect_err("404 should fail the list");
    mock.assert();

    assert_eq!(err.to_string(), "Failed to fetch blog list");
    assert_eq!(err.resource(), Resource::BlogList);
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.kind(), FetchErrorKind::NotFound);
    assert!(err.diagnostic().contains("not here"));
}

#[tokio::test]
async fn blog_detail_tolerates_missing_optional_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/get_blog_detail/cozy-corners/");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":3,"slug":"cozy-corners","title":"Cozy Corners","tags":"Living, Tips"}"#);
    });

    let post = client(&server)
        .fetch_blog_detail("cozy-corners")
        .await
        .expect("detail should decode");
    mock.assert();

    assert_eq!(post.title, "Cozy Corners");
    assert_eq!(post.tags.as_deref(), Some("Living, Tips"));
    assert!(post.body.is_empty());
}

#[tokio::test]
async fn dot_segment_slug_never_leaves_the_detail_endpoint() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":1,"slug":"api-root","title":"Not a post"}"#);
    });

    let client = client(&server);
    for slug in ["..", "."] {
        let err = client
            .fetch_blog_detail(slug)
            .await
            .expect_err("dot segments are not slugs");
        assert_eq!(err.kind(), FetchErrorKind::NotFound, "{slug}");
        assert_eq!(err.resource(), Resource::BlogDetail);
        assert!(err.diagnostic().contains("slug is not a path segment"));
    }
}

#[tokio::test]
async fn project_detail_decodes_gallery() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/get_project_detail/7/");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"id":7,"title":"Lake View Villa","area":"3,200 sq ft","year":"2024",
                    "hero_image":"/media/villa.jpg","is_active":true,
                    "project_gallery":[{"id":1,"image":"/media/villa-1.jpg","label":"Living","order":1}]}"#,
            );
    });

    let project = client(&server)
        .fetch_project_detail(7)
        .await
        .expect("project should decode");
    mock.assert();

    assert_eq!(project.status_label(), "Active");
    let gallery = project.project_gallery.expect("gallery present");
    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0].label, "Living");
}

#[tokio::test]
async fn malformed_json_is_a_decode_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/get_job_list/");
        then.status(200)
            .header("content-type", "application/json")
            .body("[{\"id\":");
    });

    let err = client(&server)
        .fetch_job_list()
        .await
        .expect_err("truncated json should fail");

    assert!(matches!(err, FetchError::Decode { .. }));
    assert_eq!(err.kind(), FetchErrorKind::Unavailable);
    assert_eq!(err.to_string(), "Failed to fetch job list");
}

#[tokio::test]
async fn unreachable_origin_is_a_transport_failure() {
    let client = ContentApiClient::new(&ContentApiSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        request_timeout: Duration::from_secs(2),
    })
    .expect("client should build");

    let err = client
        .fetch_project_list()
        .await
        .expect_err("nothing listens on the discard port");
    assert_eq!(err.kind(), FetchErrorKind::Unavailable);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn apply_posts_multipart_and_reports_success() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/api/apply_job/");
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"message":"Application received"}"#);
    });

    let outcome = client(&server).apply_to_job(application()).await;
    mock.assert();

    assert_eq!(
        outcome,
        ApplyOutcome::Submitted {
            message: "Application received".to_string()
        }
    );
}

#[tokio::test]
async fn apply_422_maps_field_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/api/apply_job/");
        then.status(422)
            .header("content-type", "application/json")
            .body(r#"{"message":"Invalid data","errors":{"email":["Enter a valid email address.","Too long."]}}"#);
    });

    let outcome = client(&server).apply_to_job(application()).await;

    let ApplyOutcome::ValidationFailure {
        message,
        field_errors,
    } = outcome
    else {
        panic!("expected validation failure, got {outcome:?}");
    };
    assert_eq!(message, "Invalid data");
    assert_eq!(
        field_errors.get("email").map(Vec::len),
        Some(2),
        "every message per field is kept"
    );
}

#[tokio::test]
async fn apply_non_json_error_is_a_transport_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/api/apply_job/");
        then.status(500).body("Internal Server Error");
    });

    let outcome = client(&server).apply_to_job(application()).await;

    assert_eq!(
        outcome,
        ApplyOutcome::TransportFailure {
            status: Some(StatusCode::INTERNAL_SERVER_ERROR),
            raw_body: "Internal Server Error".to_string(),
        }
    );
}
