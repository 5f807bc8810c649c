use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDateTime;
use chrono::Utc;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ElectricalDrawingInfo {
    pub drawing_no: String,
    pub drawing_title: String,
    pub sheet_no: i32,
    pub revision: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DrawingLinkRequest {
    pub resource_type: String,
    pub resource_id: String,
    pub drawing: ElectricalDrawingInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrawingLink {
    pub resource_type: String,
    pub resource_id: String,
    pub drawing: ElectricalDrawingInfo,
    pub linked_at: NaiveDateTime,
}

/// In-process registry mapping a (resource type, resource id) pair to the
/// drawing currently linked to it.
pub struct DrawingLinkStore {
    links: Mutex<HashMap<(String, String), DrawingLink>>,
}

impl DrawingLinkStore {
    pub fn new() -> DrawingLinkStore {
        DrawingLinkStore {
            links: Mutex::new(HashMap::new()),
        }
    }

    /// Links a drawing to a resource, replacing any drawing already linked
    /// to the same pair.
    pub fn link(&self, request: &DrawingLinkRequest) -> DrawingLink {
        let link = DrawingLink {
            resource_type: request.resource_type.to_owned(),
            resource_id: request.resource_id.to_owned(),
            drawing: request.drawing.clone(),
            linked_at: Utc::now().naive_utc(),
        };

        let mut links = self.links.lock().unwrap();
        links.insert(
            (link.resource_type.clone(), link.resource_id.clone()),
            link.clone(),
        );

        link
    }

    pub fn get(&self, resource_type: &str, resource_id: &str) -> Result<DrawingLink, ServiceError> {
        let links = self.links.lock().unwrap();

        links
            .get(&(resource_type.to_owned(), resource_id.to_owned()))
            .cloned()
            .ok_or_else(|| ServiceError::DrawingNotLinked {
                resource_type: resource_type.to_owned(),
                resource_id: resource_id.to_owned(),
            })
    }

    pub fn unlink(
        &self,
        resource_type: &str,
        resource_id: &str,
    ) -> Result<DrawingLink, ServiceError> {
        let mut links = self.links.lock().unwrap();

        links
            .remove(&(resource_type.to_owned(), resource_id.to_owned()))
            .ok_or_else(|| ServiceError::DrawingNotLinked {
                resource_type: resource_type.to_owned(),
                resource_id: resource_id.to_owned(),
            })
    }
}

impl Default for DrawingLinkStore {
    fn default() -> DrawingLinkStore {
        DrawingLinkStore::new()
    }
}

pub static DRAWING_LINKS: Lazy<DrawingLinkStore> = Lazy::new(DrawingLinkStore::new);
