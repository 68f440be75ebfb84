//! Interactive API documentation.
//!
//! Serves an OpenAPI 3.1 description of the routes at `/openapi.json`, plus
//! Swagger UI at `/docs` and ReDoc at `/redoc`. Both UIs load their assets
//! from the jsDelivr CDN.

use axum::{response::Html, Json};
use serde_json::{json, Value};

/// Path of the OpenAPI document the UI pages load.
pub const OPENAPI_PATH: &str = "/openapi.json";

const TITLE: &str = "Intro API";

/// OpenAPI document for all routes.
pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

/// Swagger UI page.
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<link type="text/css" rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
<title>{TITLE} - Swagger UI</title>
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
const ui = SwaggerUIBundle({{
    url: '{OPENAPI_PATH}',
    dom_id: '#swagger-ui',
    layout: 'BaseLayout',
    deepLinking: true,
    showExtensions: true,
    showCommonExtensions: true,
    presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.SwaggerUIStandalonePreset],
}})
</script>
</body>
</html>"#
    ))
}

/// ReDoc page.
pub async fn redoc() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{TITLE} - ReDoc</title>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>body {{ margin: 0; padding: 0; }}</style>
</head>
<body>
<noscript>ReDoc requires Javascript to function. Please enable it to browse the documentation.</noscript>
<redoc spec-url="{OPENAPI_PATH}"></redoc>
<script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>"#
    ))
}

/// Build the OpenAPI 3.1 document.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": TITLE,
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/": {
                "get": operation("Home", "Describes the available endpoints.", json_object())
            },
            "/posts": {
                "get": {
                    "summary": "Get Posts",
                    "description": "Fetches posts from JSONPlaceholder and returns them as JSON.",
                    "parameters": [{
                        "name": "limit",
                        "in": "query",
                        "required": false,
                        "description": "Number of posts to fetch",
                        "schema": { "type": "integer", "default": 5 }
                    }],
                    "responses": {
                        "200": json_response(json!({ "type": "array", "items": {} })),
                        "422": validation_error()
                    }
                }
            },
            "/methods": {
                "get": operation("Hello Get", "Returns a greeting.", message_schema()),
                "post": {
                    "summary": "Hello Post",
                    "description": "Returns a farewell message with status 500.",
                    "responses": { "500": json_response(message_schema()) }
                }
            },
            "/greeting/{name}": {
                "get": {
                    "summary": "Greeting",
                    "description": "Greets the user by name.",
                    "parameters": [{
                        "name": "name",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string" }
                    }],
                    "responses": { "200": json_response(message_schema()) }
                }
            },
            "/ping": {
                "get": operation("Ping", "Health check.", json!({
                    "type": "object",
                    "properties": { "status": { "type": "string" } }
                }))
            },
            "/echo": {
                "post": {
                    "summary": "Echo",
                    "description": "Receives JSON data and echoes it back.",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": json_object() } }
                    },
                    "responses": {
                        "200": json_response(json!({
                            "type": "object",
                            "properties": {
                                "received": json_object(),
                                "message": { "type": "string" }
                            }
                        })),
                        "422": validation_error()
                    }
                }
            }
        }
    })
}

fn operation(summary: &str, description: &str, schema: Value) -> Value {
    json!({
        "summary": summary,
        "description": description,
        "responses": { "200": json_response(schema) }
    })
}

fn json_response(schema: Value) -> Value {
    json!({
        "description": "Successful Response",
        "content": { "application/json": { "schema": schema } }
    })
}

fn validation_error() -> Value {
    json!({
        "description": "Validation Error",
        "content": {
            "application/json": {
                "schema": {
                    "type": "object",
                    "properties": { "detail": { "type": "string" } }
                }
            }
        }
    })
}

fn message_schema() -> Value {
    json!({
        "type": "object",
        "properties": { "message": { "type": "string" } }
    })
}

fn json_object() -> Value {
    json!({ "type": "object", "additionalProperties": true })
}
