use assert_matches::assert_matches;
use pokedex_client::{
    ClientOptions,
    FailureKind,
    NetworkError,
    PokeApiClient,
    RemoteError,
    failure_kind,
    is_not_found,
};
use pokedex_data::{
    ListPage,
    Stat,
};
use pokedex_schema::ValidationError;
use pokedex_test_utils::{
    FakeTransport,
    RecordedRequest,
    fixtures,
    setup_test_environment,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn client(transport: &FakeTransport) -> PokeApiClient {
    PokeApiClient::with_transport(ClientOptions::default(), Box::new(transport.clone()))
}

#[tokio::test]
async fn fetches_pokemon_by_id_and_name() {
    setup_test_environment();

    let transport = FakeTransport::new().with_pokemon(fixtures::bulbasaur());
    let client = client(&transport);

    let by_id = client.get_pokemon(1u32).await.unwrap();
    let by_name = client.get_pokemon("bulbasaur").await.unwrap();
    assert_eq!(by_id, by_name);
    assert_eq!(by_id.name, "bulbasaur");
    assert_eq!(by_id.stat_total(), 318);
    assert_eq!(
        transport.requested_paths(),
        vec!["pokemon/1", "pokemon/bulbasaur"]
    );
}

#[tokio::test]
async fn not_found_is_distinguishable_from_server_error() {
    setup_test_environment();

    let transport = FakeTransport::new().with_json(
        "pokemon/25",
        500,
        json!({ "detail": "internal error" }),
    );
    let client = client(&transport);

    let not_found = client.get_pokemon("missingno").await.unwrap_err();
    assert_eq!(failure_kind(&not_found), FailureKind::NotFound);
    assert!(is_not_found(&not_found));
    assert_matches!(not_found.downcast_ref::<RemoteError>(), Some(error) => {
        assert_eq!(error.status(), 404);
    });

    let server = client.get_pokemon(25u32).await.unwrap_err();
    assert_eq!(failure_kind(&server), FailureKind::Unavailable);
    assert!(!is_not_found(&server));
    assert_matches!(server.downcast_ref::<RemoteError>(), Some(error) => {
        assert_eq!(error.status(), 500);
        assert_eq!(error.details(), Some(&json!({ "detail": "internal error" })));
    });
}

#[tokio::test]
async fn non_json_error_body_becomes_message_details() {
    setup_test_environment();

    let transport = FakeTransport::new().with_body("pokemon/1", 502, "<html>Bad Gateway</html>");
    let client = client(&transport);

    let error = client.get_pokemon(1u32).await.unwrap_err();
    assert_matches!(error.downcast_ref::<RemoteError>(), Some(error) => {
        assert_eq!(error.status(), 502);
        assert!(error.details().unwrap()["message"].is_string());
    });
}

#[tokio::test]
async fn invalid_payload_surfaces_validation_error() {
    setup_test_environment();

    let mut payload = fixtures::bulbasaur();
    payload["stats"] = json!([]);
    let transport = FakeTransport::new().with_json("pokemon/1", 200, payload);
    let client = client(&transport);

    let error = client.get_pokemon(1u32).await.unwrap_err();
    assert_eq!(failure_kind(&error), FailureKind::InvalidData);
    assert_matches!(error.downcast_ref::<ValidationError>(), Some(_));
}

#[tokio::test]
async fn unknown_stat_surfaces_validation_error() {
    setup_test_environment();

    let mut payload = fixtures::bulbasaur();
    payload["stats"][5]["stat"]["name"] = json!("evasion");
    let transport = FakeTransport::new().with_json("pokemon/1", 200, payload);
    let client = client(&transport);

    let error = client.get_pokemon(1u32).await.unwrap_err();
    assert_eq!(failure_kind(&error), FailureKind::InvalidData);
}

#[tokio::test]
async fn malformed_json_surfaces_validation_error() {
    setup_test_environment();

    let transport = FakeTransport::new().with_body("pokemon/1", 200, "{\"id\": 1,");
    let client = client(&transport);

    let error = client.get_pokemon(1u32).await.unwrap_err();
    assert_eq!(failure_kind(&error), FailureKind::InvalidData);
}

#[tokio::test]
async fn network_failure_propagates() {
    setup_test_environment();

    let transport = FakeTransport::new()
        .with_network_failure("pokemon/1")
        .with_network_failure("pokemon");
    let client = client(&transport);

    let error = client.get_pokemon(1u32).await.unwrap_err();
    assert_eq!(failure_kind(&error), FailureKind::Network);
    assert_matches!(error.downcast_ref::<NetworkError>(), Some(_));

    let error = client.get_pokemon_list(None, 0).await.unwrap_err();
    assert_eq!(failure_kind(&error), FailureKind::Network);
}

#[tokio::test]
async fn fetches_list_page_with_limit_and_offset() {
    setup_test_environment();

    let transport = FakeTransport::new().with_json(
        "pokemon",
        200,
        fixtures::list_page(1302, 20, 2, &["spearow", "fearow"]),
    );
    let client = client(&transport);

    let page = client.get_pokemon_list(Some(2), 20).await.unwrap();
    assert_eq!(page.count, 1302);
    assert!(page.has_next());
    assert!(page.previous.is_some());
    assert_eq!(
        page.results
            .iter()
            .map(|entry| entry.name.as_str())
            .collect::<Vec<_>>(),
        vec!["spearow", "fearow"]
    );
    assert_eq!(
        transport.requests(),
        vec![RecordedRequest {
            path: "pokemon".to_owned(),
            query: vec![
                ("limit".to_owned(), "2".to_owned()),
                ("offset".to_owned(), "20".to_owned()),
            ],
        }]
    );
}

#[tokio::test]
async fn list_uses_default_limit() {
    setup_test_environment();

    let transport = FakeTransport::new().with_json(
        "pokemon",
        200,
        fixtures::list_page(0, 0, 24, &[]),
    );
    let client = client(&transport);

    client.get_pokemon_list(None, 0).await.unwrap();
    assert_eq!(
        transport.requests()[0].query[0],
        ("limit".to_owned(), "24".to_owned())
    );
}

#[tokio::test]
async fn list_server_error_yields_empty_page() {
    setup_test_environment();

    let transport = FakeTransport::new().with_json(
        "pokemon",
        503,
        json!({ "detail": "Service Unavailable" }),
    );
    let client = client(&transport);

    let page = client.get_pokemon_list(Some(12), 0).await.unwrap();
    assert_eq!(
        page,
        ListPage {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    );
}

#[tokio::test]
async fn list_client_error_propagates() {
    setup_test_environment();

    let transport =
        FakeTransport::new().with_json("pokemon", 400, json!({ "detail": "bad request" }));
    let client = client(&transport);

    let error = client.get_pokemon_list(Some(12), 0).await.unwrap_err();
    assert_matches!(error.downcast_ref::<RemoteError>(), Some(error) => {
        assert_eq!(error.status(), 400);
    });
}

#[tokio::test]
async fn invalid_list_payload_propagates() {
    setup_test_environment();

    let transport = FakeTransport::new().with_json("pokemon", 200, json!({ "count": 1 }));
    let client = client(&transport);

    let error = client.get_pokemon_list(None, 0).await.unwrap_err();
    assert_eq!(failure_kind(&error), FailureKind::InvalidData);
}

#[tokio::test]
async fn search_normalizes_term() {
    setup_test_environment();

    let transport = FakeTransport::new().with_pokemon(fixtures::charmander());
    let client = client(&transport);

    let pokemon = client.search_pokemon("  CharMander ").await.unwrap();
    assert_eq!(pokemon.id, 4);
    assert_eq!(pokemon.base_stat(Stat::Speed), 65);
    assert_eq!(transport.requested_paths(), vec!["pokemon/charmander"]);
}

#[tokio::test]
async fn search_for_unknown_term_is_not_found() {
    setup_test_environment();

    let transport = FakeTransport::new();
    let client = client(&transport);

    let error = client.search_pokemon("agumon").await.unwrap_err();
    assert!(is_not_found(&error));
}

#[tokio::test]
async fn invalid_search_term_issues_no_request() {
    setup_test_environment();

    let transport = FakeTransport::new();
    let client = client(&transport);

    let error = client.search_pokemon("   ").await.unwrap_err();
    assert_eq!(failure_kind(&error), FailureKind::InvalidData);
    let error = client.search_pokemon("../type/1").await.unwrap_err();
    assert_eq!(failure_kind(&error), FailureKind::InvalidData);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn rejects_names_that_are_not_slugs() {
    setup_test_environment();

    let transport = FakeTransport::new().with_pokemon(fixtures::bulbasaur());
    let client = client(&transport);

    let error = client.get_pokemon("../type/1").await.unwrap_err();
    assert_eq!(failure_kind(&error), FailureKind::InvalidData);
    assert_matches!(error.downcast_ref::<ValidationError>(), Some(_));
    assert!(transport.requested_paths().is_empty());
}
