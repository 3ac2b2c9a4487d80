//! PostgREST table access

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{read_body, SupabaseClient, SupabaseResult};

/// Query-string filters for a table request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.into(), format!("eq.{}", value)));
        self
    }

    /// Repeated calls add tie-breakers to the same `order` parameter
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let dir = if ascending { "asc" } else { "desc" };
        let term = format!("{}.{}", column, dir);
        match self.params.iter_mut().find(|(k, _)| k == "order") {
            Some((_, value)) => {
                value.push(',');
                value.push_str(&term);
            }
            None => self.params.push(("order".into(), term)),
        }
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.params.push(("limit".into(), n.to_string()));
        self
    }

    pub fn on_conflict(mut self, columns: &str) -> Self {
        self.params.push(("on_conflict".into(), columns.into()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

const RETURN_REPRESENTATION: &str = "return=representation";
const MERGE_DUPLICATES: &str = "resolution=merge-duplicates,return=representation";

impl SupabaseClient {
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
        token: &str,
    ) -> SupabaseResult<Vec<T>> {
        let request = self.client.get(self.rest_url(table)).query(query.params());
        let response = self.authorize(request, Some(token)).send().await?;
        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Insert one row and return it as stored
    pub async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        row: &B,
        token: &str,
    ) -> SupabaseResult<Vec<T>> {
        let request = self
            .client
            .post(self.rest_url(table))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(row);
        let response = self.authorize(request, Some(token)).send().await?;
        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn upsert<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        row: &B,
        conflict_columns: &str,
        token: &str,
    ) -> SupabaseResult<Vec<T>> {
        let query = Query::new().on_conflict(conflict_columns);
        let request = self
            .client
            .post(self.rest_url(table))
            .query(query.params())
            .header("Prefer", MERGE_DUPLICATES)
            .json(row);
        let response = self.authorize(request, Some(token)).send().await?;
        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
        patch: &B,
        token: &str,
    ) -> SupabaseResult<Vec<T>> {
        let request = self
            .client
            .patch(self.rest_url(table))
            .query(query.params())
            .header("Prefer", RETURN_REPRESENTATION)
            .json(patch);
        let response = self.authorize(request, Some(token)).send().await?;
        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Delete matching rows; an unfiltered delete is refused by PostgREST
    pub async fn delete(&self, table: &str, query: &Query, token: &str) -> SupabaseResult<()> {
        let request = self.client.delete(self.rest_url(table)).query(query.params());
        let response = self.authorize(request, Some(token)).send().await?;
        read_body(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn make_client() -> SupabaseClient {
        SupabaseClient::new("https://abc.supabase.co", "anon", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_query_params_in_order() {
        let query = Query::new()
            .select("*")
            .eq("user_id", "u1")
            .order("created_at", false);
        assert_eq!(
            query.params(),
            &[
                ("select".to_string(), "*".to_string()),
                ("user_id".to_string(), "eq.u1".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_order_tie_breakers_share_one_param() {
        let query = Query::new()
            .order("entry_date", false)
            .order("created_at", false);
        assert_eq!(
            query.params(),
            &[("order".to_string(), "entry_date.desc,created_at.desc".to_string())]
        );
    }

    #[test]
    fn test_query_renders_into_url() {
        let client = make_client();
        let query = Query::new().select("*").eq("id", "p1").limit(1);
        let request = client
            .client
            .get(client.rest_url("profiles"))
            .query(query.params())
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://abc.supabase.co/rest/v1/profiles?select=*&id=eq.p1&limit=1"
        );
    }
}
