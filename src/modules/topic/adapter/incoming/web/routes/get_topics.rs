use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{
    auth::adapter::incoming::web::extractors::client_credentials::ClientCredentials,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::TopicCatalog,
    topic::application::ports::outgoing::{PageRequest, PageResult, TopicListFilter, TopicRecord},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListTopicsParams {
    page: Option<u32>,
    page_size: Option<u32>,
    category: Option<String>,
    format: Option<String>,
}

/// Output shape selector. `array` and `list` are aliases kept for the
/// embedded WordPress widget; everything else gets the paginated shape.
#[derive(Debug, PartialEq)]
enum ListFormat {
    Paginated,
    Flat,
}

impl ListFormat {
    fn parse(raw: Option<&str>) -> Option<Self> {
        match raw.map(|value| value.to_lowercase()).as_deref() {
            None | Some("") | Some("paginated") => Some(Self::Paginated),
            Some("array") | Some("list") => Some(Self::Flat),
            Some(_) => None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InvalidFormatBody {
    error: &'static str,
    valid_formats: [&'static str; 3],
}

fn invalid_format_response() -> HttpResponse {
    HttpResponse::BadRequest().json(InvalidFormatBody {
        error: "Invalid format parameter",
        valid_formats: ["array", "paginated", "list"],
    })
}

// Defaults apply only when a parameter is absent; out-of-range values are
// rejected instead of clamped.
fn parse_page_request(params: &ListTopicsParams) -> Result<PageRequest, HttpResponse> {
    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(10);

    if page < 1 || !(1..=100).contains(&page_size) {
        return Err(ApiResponse::error_with_message(
            StatusCode::BAD_REQUEST,
            "Invalid pagination parameters",
            "page must be at least 1 and pageSize must be between 1 and 100",
        ));
    }

    Ok(PageRequest { page, page_size })
}

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

/// The two listing shapes, picked by `ListFormat` and nothing else.
/// `untagged` so each variant serializes as its bare body.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum TopicListResponse {
    Paginated(PageResult<TopicRecord>),
    Flat(TopicCatalog),
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/api/topics")]
pub async fn get_topics_handler(
    _credentials: ClientCredentials,
    data: web::Data<AppState>,
    params: web::Query<ListTopicsParams>,
) -> impl Responder {
    let params = params.into_inner();

    let format = match ListFormat::parse(params.format.as_deref()) {
        Some(format) => format,
        None => return invalid_format_response(),
    };

    let filter = TopicListFilter::from_category_param(params.category.clone());

    let response = match format {
        ListFormat::Flat => match data.topic.get_catalog.execute(filter).await {
            Ok(catalog) => {
                info!(
                    items = catalog.items.len(),
                    "Fetched topics in flat format"
                );
                TopicListResponse::Flat(catalog)
            }
            Err(err) => {
                error!("Error fetching topics: {}", err);
                return ApiResponse::internal_error(&err.to_string());
            }
        },

        ListFormat::Paginated => {
            let page = match parse_page_request(&params) {
                Ok(page) => page,
                Err(response) => return response,
            };

            match data.topic.get_list.execute(filter, page).await {
                Ok(result) => {
                    info!(
                        page = result.page,
                        items = result.items.len(),
                        total = result.total,
                        "Fetched topics page"
                    );
                    TopicListResponse::Paginated(result)
                }
                Err(err) => {
                    error!("Error fetching topics: {}", err);
                    return ApiResponse::internal_error(&err.to_string());
                }
            }
        }
    };

    ApiResponse::success(response)
}
