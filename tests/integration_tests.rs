//! End-to-end tests: credentials and invoice data through to the wire.

use std::error::Error;

use chrono::{TimeZone, Utc};
use profit365_api::data::{Data, InvoiceData, InvoiceRowData};
use profit365_api::requests::SaleInvoiceCreateRequest;
use profit365_api::{
    ApiRequest, AuthCredentials, AuthHeader, AuthScheme, AuthenticationFormatError, BaseUrl,
    ClientId, ClientSecret, Communicator, CompanyId, HeaderContributor, ProfitConfig,
};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLIENT_ID: &str = "11111111-1111-1111-1111-111111111111";
const COMPANY_ID: &str = "22222222-2222-2222-2222-222222222222";

fn widget_invoice() -> InvoiceData {
    InvoiceData::new(
        "2024-01-01T00:00:00Z",
        vec![InvoiceRowData::new("Widget", 9.99, 2).unwrap()],
    )
}

fn basic_credentials(key: &str) -> Result<AuthCredentials, AuthenticationFormatError> {
    AuthCredentials::new(
        AuthScheme::Basic,
        key,
        ClientSecret::new("client-secret").unwrap(),
        ClientId::new(CLIENT_ID).unwrap(),
        Some(CompanyId::new(COMPANY_ID).unwrap()),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_sale_invoice_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1.4/sales/invoices"))
        .and(header("ClientID", CLIENT_ID))
        .and(header("ClientSecret", "client-secret"))
        .and(header(
            "Authorization",
            "basic amFuZUBleGFtcGxlLmNvbTpzM2NyZXQ=",
        ))
        .and(header("CompanyID", COMPANY_ID))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "date": "2024-01-01T00:00:00Z",
            "rows": [{"name": "Widget", "price": 9.99, "quantity": 2}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":"ignored"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthHeader::new(basic_credentials("jane@example.com:s3cret").unwrap());
    let request = SaleInvoiceCreateRequest::new(&widget_invoice()).unwrap();
    let config = ProfitConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build();

    let status = tokio::task::spawn_blocking(move || {
        Communicator::new(&config)
            .unwrap()
            .request(&auth, &request)
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(status, 201);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_basic_key_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = tokio::task::spawn_blocking(move || -> Result<u16, Box<dyn Error + Send + Sync>> {
        let auth = AuthHeader::new(basic_credentials("not-an-email")?);
        let request = SaleInvoiceCreateRequest::new(&widget_invoice())?;
        let config = ProfitConfig::builder()
            .base_url(BaseUrl::new(uri)?)
            .build();
        Ok(Communicator::new(&config)?.request(&auth, &request)?)
    })
    .await
    .unwrap();

    let error = result.unwrap_err();
    assert!(error.downcast_ref::<AuthenticationFormatError>().is_some());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test]
fn test_api_key_scenario_headers() {
    let auth = AuthHeader::new(AuthCredentials::api_key(
        "abc123",
        ClientSecret::new("s3cret").unwrap(),
        ClientId::new(CLIENT_ID).unwrap(),
        None,
    ));

    assert_eq!(
        auth.component_result().lines(),
        [
            "ClientID: 11111111-1111-1111-1111-111111111111",
            "ClientSecret: s3cret",
            "Authorization: apiKey abc123",
        ]
    );
}

#[test]
fn test_invoice_body_round_trips() {
    let invoice = InvoiceData::dated(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        vec![InvoiceRowData::new("Widget", 9.99, 2).unwrap()],
    );
    let request = SaleInvoiceCreateRequest::new(&invoice).unwrap();

    let decoded: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(request.content().unwrap()).unwrap();
    assert_eq!(&decoded, invoice.get_data());
    assert_eq!(&decoded, widget_invoice().get_data());
}

#[test]
fn test_posted_headers_for_invoice_request() {
    let auth = AuthHeader::new(basic_credentials("jane@example.com:s3cret").unwrap());
    let request = SaleInvoiceCreateRequest::new(&widget_invoice()).unwrap();

    let headers = Communicator::compose_headers(&auth, &request);
    assert_eq!(
        headers.names(),
        vec![
            "ClientID",
            "ClientSecret",
            "Authorization",
            "CompanyID",
            "Content-Type"
        ]
    );
}
