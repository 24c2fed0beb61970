use {
    crate::{
        catalog::{CatalogClient, GamePass},
        error::{ApiError, CatalogError},
        logger::RequestId,
    },
    actix_web::{dev::HttpServiceFactory, get, web, HttpResponse},
    serde::{Deserialize, Serialize},
};

pub fn service() -> impl HttpServiceFactory + 'static {
    get_passes
}

/// Raw query pairs. A repeated `userId` is not an error, the first one wins.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct LookupQuery(Vec<(String, String)>);

impl LookupQuery {
    fn user_id(self) -> Option<String> {
        self.0
            .into_iter()
            .find(|(key, _)| key == "userId")
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    #[serde(rename = "userId")]
    user_id: String,
    passes: Vec<GamePass>,
}

#[get("/getpasses")]
pub async fn get_passes(
    request_id: RequestId,
    query: web::Query<LookupQuery>,
    catalog: web::Data<CatalogClient>,
) -> Result<HttpResponse, ApiError> {
    let user_id = match query.into_inner().user_id() {
        Some(user_id) => user_id,
        None => {
            tracing::debug!("rejected lookup without userId");
            return Err(ApiError::MissingParameter);
        }
    };

    let passes = catalog.game_passes(&user_id).await.map_err(|err| {
        match &err {
            CatalogError::Status(status) => {
                tracing::error!(%request_id, %status, user_id = %user_id, "catalog returned an error status")
            }
            CatalogError::Transport(source) => {
                tracing::error!(%request_id, error = %source, user_id = %user_id, "catalog lookup failed")
            }
        }

        ApiError::from(err)
    })?;

    tracing::info!(user_id = %user_id, count = passes.len(), "found passes");

    Ok(HttpResponse::Ok().json(LookupResponse { user_id, passes }))
}
