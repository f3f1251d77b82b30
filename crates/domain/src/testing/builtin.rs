//! The contract suite shipped with the binary.
//!
//! Expected statuses are kept exactly as the service was observed to answer,
//! including the 400/404 answers to requests a well-behaved API would accept.

use serde_json::json;

use super::case::TestCase;
use super::suite::TestSuite;
use crate::request::HttpMethod;

/// Service the built-in suite targets unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://api-desafio-qa.onrender.com";

/// Name reported for the built-in suite.
pub const BUILTIN_SUITE_NAME: &str = "api-desafio-qa";

/// Builds the built-in suite.
#[must_use]
pub fn builtin_suite() -> TestSuite {
    TestSuite::new(BUILTIN_SUITE_NAME)
        .with_case(
            TestCase::new("create user", HttpMethod::Post, "/users", 201)
                .with_body(json!({
                    "name": "John",
                    "last_name": "Doe",
                    "email": "john.doe@example.com"
                }))
                .expect_body(json!({"name": "John"})),
        )
        .with_case(TestCase::get("list users", "/users", 200))
        .with_case(
            TestCase::new("delete user by id", HttpMethod::Delete, "/users/{id}", 404)
                .param("id", 2),
        )
        .with_case(TestCase::get("get company", "/company", 200))
        .with_case(TestCase::get("list products", "/produtos", 200))
        .with_case(TestCase::get("get product by id", "/produtos/{id}", 200).param("id", 1))
        .with_case(
            TestCase::new(
                "update company product",
                HttpMethod::Put,
                "/company/{company_id}/products/{product_id}",
                404,
            )
            .param("company_id", 1)
            .param("product_id", 1)
            .with_body(json!({"name": "Updated Product"})),
        )
        .with_case(TestCase::get("list clients", "/clients", 200))
        .with_case(TestCase::get("get client by id", "/clients/{id}", 200).param("id", 1))
        // Client 1 and product 1 do not exist on the service.
        .with_case(
            TestCase::new("create credit for unknown client", HttpMethod::Post, "/credit", 400)
                .with_body(json!({"id_client": 1, "id_product": 1, "value_credit": 100})),
        )
        .with_case(
            TestCase::new("create event", HttpMethod::Post, "/eventos", 201).with_body(json!({
                "nome": "Evento ProvaAa Leandro",
                "data": "2024-10-02",
                "local": "Locaall Teste",
                "capacidade": 12
            })),
        )
        .with_case(
            TestCase::new("create useless hero", HttpMethod::Post, "/herois-inuteis", 400)
                .with_body(json!({
                    "id": 99999,
                    "nome": "Leanderson DEV",
                    "habilidade": "Pode se transformar em uma sombra",
                    "problema": "Só pode usar poderes em áreas bem iluminadas"
                })),
        )
        .with_case(
            TestCase::new("create anime", HttpMethod::Post, "/animes", 201).with_body(json!({
                "name": "Leandersoan UchihaA",
                "yearOfCreation": 2023,
                "topCharacters": [
                    "Naruto Uzumaki",
                    "Sasuke Uchiha",
                    "Sakura Haruno",
                    "Kakashi Hatake",
                    "Itachi Uchiha"
                ]
            })),
        )
        .with_case(
            TestCase::new("update anime by id", HttpMethod::Put, "/animes/{id}", 400)
                .param("id", 1)
                .with_body(json!({
                    "name": "Naruto",
                    "yearOfCreation": 2007,
                    "topCharacters": ["Naruto Uzumaki"]
                })),
        )
        .with_case(
            TestCase::new("delete anime by id", HttpMethod::Delete, "/animes/{id}", 404)
                .param("id", 1),
        )
}
