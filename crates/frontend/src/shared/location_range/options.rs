//! Live option queries for the cascade

use async_trait::async_trait;
use contracts::shared::graphql::ListPage;
use contracts::shared::location_range::{
    AxisValueGroup, BLOCK_OPTIONS_PAGE_SIZE, BLOCK_OPTIONS_QUERY, LOCATION_AXIS_GROUPS_QUERY,
};
use serde::Deserialize;
use serde_json::json;
use std::rc::Rc;

use super::cascade::{sort_options, CascadeEvent, OptionFetch};
use crate::shared::graphql::{fetch_field, ApiError, GraphQlTransport};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BlockOption {
    pub id: String,
    pub name: String,
}

#[async_trait(?Send)]
pub trait AxisOptionSource {
    async fn blocks(&self) -> Result<Vec<BlockOption>, ApiError>;

    async fn axis_values(&self, fetch: &OptionFetch) -> Result<Vec<String>, ApiError>;
}

/// Blocks from `blocks`, axis values from the `locationGroups` count query
pub struct GraphQlAxisOptions {
    transport: Rc<dyn GraphQlTransport>,
}

impl GraphQlAxisOptions {
    pub fn new(transport: Rc<dyn GraphQlTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait(?Send)]
impl AxisOptionSource for GraphQlAxisOptions {
    async fn blocks(&self) -> Result<Vec<BlockOption>, ApiError> {
        let page: ListPage<BlockOption> = fetch_field(
            self.transport.as_ref(),
            BLOCK_OPTIONS_QUERY,
            json!({ "itemsPerPage": BLOCK_OPTIONS_PAGE_SIZE }),
            "blocks",
        )
        .await?;
        if page.count > page.results.len() as u64 {
            log::warn!(
                "block picker shows {} of {} blocks",
                page.results.len(),
                page.count
            );
        }
        Ok(page.results)
    }

    async fn axis_values(&self, fetch: &OptionFetch) -> Result<Vec<String>, ApiError> {
        let groups: Vec<AxisValueGroup> = fetch_field(
            self.transport.as_ref(),
            LOCATION_AXIS_GROUPS_QUERY,
            fetch.variables(),
            "locationGroups",
        )
        .await?;
        Ok(groups.iter().filter_map(AxisValueGroup::option).collect())
    }
}

/// Run one fetch and turn its outcome into the event that completes it.
pub async fn resolve_fetch(source: &dyn AxisOptionSource, fetch: &OptionFetch) -> CascadeEvent {
    match source.axis_values(fetch).await {
        Ok(values) => CascadeEvent::OptionsLoaded {
            token: fetch.token,
            options: sort_options(values),
        },
        Err(e) => {
            log::warn!("location options for {:?} failed: {}", fetch.token, e);
            CascadeEvent::OptionsFailed {
                token: fetch.token,
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::graphql::testing::ScriptedTransport;
    use crate::shared::location_range::{AxisState, LocationCascade};
    use contracts::shared::location_range::{LocationAxis, Side};
    use futures::executor::block_on;

    fn source(transport: &Rc<ScriptedTransport>) -> GraphQlAxisOptions {
        GraphQlAxisOptions::new(transport.clone())
    }

    #[test]
    fn test_axis_values_from_groups() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.reply(Ok(json!({ "locationGroups": [
            { "value": "10", "count": 40 },
            { "value": "2", "count": 12 },
            { "value": null, "count": 3 },
            { "value": "7", "count": 0 }
        ] })));

        let t = LocationCascade::new()
            .apply(CascadeEvent::SelectBlock(Some("b1".into())));
        let event = block_on(resolve_fetch(&source(&transport), &t.fetches[0]));
        assert_eq!(
            event,
            CascadeEvent::OptionsLoaded {
                token: t.fetches[0].token,
                options: vec!["2".to_string(), "10".to_string()],
            }
        );
        let requests = transport.requests.borrow();
        assert_eq!(requests[0].query, LOCATION_AXIS_GROUPS_QUERY);
        assert_eq!(requests[0].variables["filters"], json!({ "blockId": "b1" }));
        assert_eq!(requests[0].variables["groupBy"], json!("aisle"));
    }

    #[test]
    fn test_finer_axis_groups_by_its_own_field() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.reply(Ok(json!({ "locationGroups": [{ "value": 3, "count": 2 }] })));

        let t = LocationCascade::new()
            .apply(CascadeEvent::SelectBlock(Some("b1".into())));
        let t = t.state.apply(CascadeEvent::OptionsLoaded {
            token: t.fetches[0].token,
            options: vec!["01".into()],
        });
        let t = t.state.apply(CascadeEvent::Select {
            side: Side::Origin,
            axis: LocationAxis::Aisle,
            value: "01".into(),
        });
        let event = block_on(resolve_fetch(&source(&transport), &t.fetches[0]));
        assert_eq!(
            event,
            CascadeEvent::OptionsLoaded {
                token: t.fetches[0].token,
                options: vec!["3".to_string()],
            }
        );
        let requests = transport.requests.borrow();
        assert_eq!(requests[0].variables["groupBy"], json!("column"));
        assert_eq!(
            requests[0].variables["filters"],
            json!({ "blockId": "b1", "aisle": "01" })
        );
    }

    #[test]
    fn test_failed_fetch_becomes_inline_error() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.reply(Err(ApiError::Http(500)));

        let t = LocationCascade::new()
            .apply(CascadeEvent::SelectBlock(Some("b1".into())));
        let event = block_on(resolve_fetch(&source(&transport), &t.fetches[0]));
        let state = t.state.apply(event).state;
        assert_eq!(
            state.axis(Side::Origin, LocationAxis::Aisle),
            &AxisState::Unselected {
                error: Some("server responded with status 500".into())
            }
        );
    }

    #[test]
    fn test_blocks() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.reply(Ok(json!({ "blocks": { "count": 1, "results": [
            { "id": "b1", "name": "Block A" }
        ] } })));
        let blocks = block_on(source(&transport).blocks()).unwrap();
        assert_eq!(
            blocks,
            vec![BlockOption {
                id: "b1".into(),
                name: "Block A".into()
            }]
        );
        assert_eq!(
            transport.requests.borrow()[0].variables["itemsPerPage"],
            json!(BLOCK_OPTIONS_PAGE_SIZE)
        );
    }

    #[test]
    fn test_blocks_beyond_page_keep_received_rows() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.reply(Ok(json!({ "blocks": { "count": 1500, "results": [
            { "id": "b1", "name": "Block A" },
            { "id": "b2", "name": "Block B" }
        ] } })));
        let blocks = block_on(source(&transport).blocks()).unwrap();
        assert_eq!(blocks.len(), 2);
    }
}
