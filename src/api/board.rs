//! Board Endpoints
//!
//! Bindings for `/boards/`.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{ApiResult, HttpApi};
use crate::models::{Board, BoardId};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Serialize)]
pub struct CreateBoardArgs<'a> {
    pub name: &'a str,
    pub settings: Value,
}

impl<'a> CreateBoardArgs<'a> {
    /// New board with empty settings
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            settings: Value::Object(Map::new()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RenameBoardArgs<'a> {
    pub name: &'a str,
}

// ========================
// Endpoints
// ========================

#[async_trait(?Send)]
pub trait BoardApi {
    async fn list_boards(&self) -> ApiResult<Vec<Board>>;
    async fn create_board(&self, args: &CreateBoardArgs<'_>) -> ApiResult<Board>;
    async fn rename_board(&self, id: BoardId, args: &RenameBoardArgs<'_>) -> ApiResult<()>;
    async fn delete_board(&self, id: BoardId) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl BoardApi for HttpApi {
    async fn list_boards(&self) -> ApiResult<Vec<Board>> {
        self.get_json("/boards/", &[]).await
    }

    async fn create_board(&self, args: &CreateBoardArgs<'_>) -> ApiResult<Board> {
        self.send_json(Method::POST, "/boards/", args).await
    }

    async fn rename_board(&self, id: BoardId, args: &RenameBoardArgs<'_>) -> ApiResult<()> {
        self.send_unit(Method::PUT, &format!("/boards/{}", id), Some(args)).await
    }

    async fn delete_board(&self, id: BoardId) -> ApiResult<()> {
        self.send_unit::<()>(Method::DELETE, &format!("/boards/{}", id), None).await
    }
}
