use {
    crate::error::CatalogError,
    reqwest::Client,
    serde::{Deserialize, Deserializer, Serialize},
    serde_json::Value,
    url::Url,
};

pub const DEFAULT_BASE_URL: &str = "https://catalog.roblox.com";

const SEARCH_PATH: &str = "/v1/search/items/details";

pub const SEARCH_LIMIT: u32 = 30;
pub const CREATOR_TYPE: &str = "User";
pub const SUBCATEGORY: &str = "GamePass";

/// Body of a catalog search response. Either the whole payload or its `data`
/// list may be absent, both of which mean "no passes".
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<CatalogItem>>,
}

/// A single catalog entry as the upstream sends it.
///
/// Values are kept as raw JSON. A field that is missing upstream stays `None`
/// while an explicit `null` becomes `Some(Value::Null)`, so both survive the
/// trip back out unchanged.
#[derive(Debug, Deserialize)]
pub struct CatalogItem {
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,
    #[serde(default, rename = "priceStatus", deserialize_with = "present")]
    pub price_status: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePass {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_status: Option<Value>,
}

impl From<CatalogItem> for GamePass {
    fn from(item: CatalogItem) -> Self {
        GamePass {
            id: item.id,
            name: item.name,
            price: item.price,
            price_status: item.price_status,
        }
    }
}

impl SearchResponse {
    pub fn into_passes(self) -> Vec<GamePass> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .map(GamePass::from)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(base_url: Url) -> Self {
        CatalogClient {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn search_url(&self) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", url.path().trim_end_matches('/'), SEARCH_PATH);
        url.set_path(&path);
        url
    }

    /// Looks up the game passes created by the given user, in the order the
    /// catalog returns them.
    pub async fn game_passes(&self, user_id: &str) -> Result<Vec<GamePass>, CatalogError> {
        let url = self.search_url();

        tracing::debug!(%url, user_id, "searching catalog");

        let limit = SEARCH_LIMIT.to_string();
        let response = self
            .client
            .get(url)
            .query(&[
                ("CreatorTargetId", user_id),
                ("CreatorType", CREATOR_TYPE),
                ("Limit", limit.as_str()),
                ("Subcategory", SUBCATEGORY),
            ])
            .send()
            .await?;

        tracing::debug!("catalog response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let body: Option<SearchResponse> = response.json().await?;

        Ok(body.unwrap_or_default().into_passes())
    }
}
