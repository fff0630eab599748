use actix_web::{App, HttpResponse, HttpServer, Responder, post, web};

use log::info;
use serde::Deserialize;
use tag_cloud_core::{Separators, TagCloud, TagCloudOptions, parse_limit};

/// Address used when `TAG_CLOUD_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Struct representing query parameters for the tag cloud endpoints
#[derive(Deserialize)]
struct CloudParams {
	limit: Option<String>,
	name: Option<String>,
	separators: Option<String>,
}

impl CloudParams {
	/// Builds run options from the query, falling back to defaults.
	fn options(&self) -> Result<TagCloudOptions, String> {
		let mut options = TagCloudOptions::default();
		if let Some(limit) = &self.limit {
			options.limit = parse_limit(limit).map_err(|e| e.to_string())?;
		}
		if let Some(spec) = &self.separators {
			options.set_separators(spec);
		}
		Ok(options)
	}

	fn name(&self) -> &str {
		match &self.name {
			Some(name) if !name.trim().is_empty() => name.trim(),
			_ => "document",
		}
	}
}

/// Struct representing query parameters for the `/v1/frequencies` endpoint
#[derive(Deserialize)]
struct FrequencyParams {
	separators: Option<String>,
}

/// Decodes the request body and counts its words.
fn build_cloud(name: &str, body: &[u8], separators: &Separators) -> Result<TagCloud, HttpResponse> {
	match std::str::from_utf8(body) {
		Ok(text) => Ok(TagCloud::from_text(name, text, separators)),
		Err(_) => Err(HttpResponse::BadRequest().body("Body must be UTF-8 text")),
	}
}

/// HTTP POST endpoint `/v1/tagcloud`
///
/// Builds a tag cloud from the request body and returns it as an HTML page.
#[post("/v1/tagcloud")]
async fn post_tag_cloud(query: web::Query<CloudParams>, body: web::Bytes) -> impl Responder {
	let options = match query.options() {
		Ok(o) => o,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	let cloud = match build_cloud(query.name(), &body, options.separators()) {
		Ok(c) => c,
		Err(response) => return response,
	};

	HttpResponse::Ok()
		.content_type("text/html; charset=utf-8")
		.body(cloud.to_html(&options))
}

/// HTTP POST endpoint `/v1/entries`
///
/// Same input as `/v1/tagcloud`, returns the display set as JSON.
#[post("/v1/entries")]
async fn post_entries(query: web::Query<CloudParams>, body: web::Bytes) -> impl Responder {
	let options = match query.options() {
		Ok(o) => o,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	match build_cloud(query.name(), &body, options.separators()) {
		Ok(cloud) => HttpResponse::Ok().json(cloud.display_set(options.limit)),
		Err(response) => response,
	}
}

/// HTTP POST endpoint `/v1/frequencies`
///
/// Returns the word → count map of the request body as JSON.
#[post("/v1/frequencies")]
async fn post_frequencies(query: web::Query<FrequencyParams>, body: web::Bytes) -> impl Responder {
	let separators = match &query.separators {
		Some(spec) => Separators::new(spec),
		None => Separators::default(),
	};
	match build_cloud("document", &body, &separators) {
		Ok(cloud) => HttpResponse::Ok().json(cloud.frequencies()),
		Err(response) => response,
	}
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server exposing the tag cloud endpoints.
///
/// # Notes
/// - The server binds to `TAG_CLOUD_ADDR`, or 127.0.0.1:5000 if unset.
/// - Each request is independent; nothing is kept between requests.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let addr = std::env::var("TAG_CLOUD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
	info!("Listening on {}", addr);

	HttpServer::new(|| {
		App::new()
			.service(post_tag_cloud)
			.service(post_entries)
			.service(post_frequencies)
	})
		.bind(addr)?
		.run()
		.await
}
