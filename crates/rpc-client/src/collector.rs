use std::collections::VecDeque;

use anyhow::Result;
use ckb_jsonrpc_types::JsonBytes;

use crate::{
    indexer_types::{Cell, Order, SearchKey},
    traits::L1Client,
    utils::DEFAULT_QUERY_LIMIT,
};

/// Lazily pages through the indexer, one `get_cells` call per page.
pub struct CellCollector<'a> {
    client: &'a dyn L1Client,
    search_key: SearchKey,
    order: Order,
    limit: u32,
    cursor: Option<JsonBytes>,
    buffer: VecDeque<Cell>,
    ended: bool,
}

impl<'a> CellCollector<'a> {
    pub fn new(client: &'a dyn L1Client, search_key: SearchKey, order: Order) -> Self {
        CellCollector {
            client,
            search_key,
            order,
            limit: DEFAULT_QUERY_LIMIT,
            cursor: None,
            buffer: VecDeque::new(),
            ended: false,
        }
    }

    pub fn with_limit(self, limit: u32) -> Self {
        CellCollector { limit, ..self }
    }

    pub async fn next(&mut self) -> Result<Option<Cell>> {
        loop {
            if let Some(cell) = self.buffer.pop_front() {
                return Ok(Some(cell));
            }
            if self.ended {
                return Ok(None);
            }

            let page = self
                .client
                .get_cells(&self.search_key, &self.order, self.limit, self.cursor.take())
                .await?;
            if page.objects.is_empty() || page.last_cursor.is_empty() {
                self.ended = true;
            }
            self.cursor = Some(page.last_cursor);
            self.buffer.extend(page.objects);
        }
    }

    /// Drain every remaining page.
    pub async fn collect_all(mut self) -> Result<Vec<Cell>> {
        let mut cells = Vec::new();
        while let Some(cell) = self.next().await? {
            cells.push(cell);
        }
        Ok(cells)
    }
}
