//! In-memory document of identified elements.
//!
//! Stands in for the HTML page the original dashboard renders into. Each
//! element is registered under its id; lookups that expect a particular
//! element kind fail with `TargetNotFound` when the id is missing or bound
//! to something else, instead of the null-dereference-class failure the
//! page contract would otherwise produce.

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::Mutex;

use crate::dom::canvas::ChartSurface;
use crate::dom::form::{InputField, MappingForm};
use crate::dom::table::TableBody;
use crate::error::DashboardError;

#[derive(Debug, Clone)]
pub enum Element {
    TableBody(TableBody),
    Canvas(ChartSurface),
    Form(MappingForm),
    Input(InputField),
}

#[derive(Debug, Default)]
pub struct Document {
    elements: IndexMap<String, Element>,
}

/// Document shared between concurrently completing flows. Each flow locks
/// it only for its synchronous render step; flows own disjoint subtrees, so
/// the lock serializes writes without ordering them.
pub type SharedDocument = Arc<Mutex<Document>>;

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the document the dashboard page contract requires: the PR
    /// table body, the four chart canvases, the mapping form, and its two
    /// inputs.
    pub fn dashboard_page() -> Self {
        let mut document = Document::new();
        document.insert_table_body("prTableBody");
        document.insert_canvas("weeklyPrChart");
        document.insert_canvas("authorPrChart");
        document.insert_canvas("dailyPrChart");
        document.insert_canvas("weeklyPrChartByTeam");
        document.insert_form("teamMappingForm");
        document.insert_input("username");
        document.insert_input("teamName");
        document
    }

    pub fn into_shared(self) -> SharedDocument {
        Arc::new(Mutex::new(self))
    }

    pub fn insert_table_body(&mut self, id: &str) {
        self.elements
            .insert(id.to_string(), Element::TableBody(TableBody::new()));
    }

    pub fn insert_canvas(&mut self, id: &str) {
        self.elements
            .insert(id.to_string(), Element::Canvas(ChartSurface::new(id)));
    }

    pub fn insert_form(&mut self, id: &str) {
        self.elements
            .insert(id.to_string(), Element::Form(MappingForm::new(id)));
    }

    pub fn insert_input(&mut self, id: &str) {
        self.elements
            .insert(id.to_string(), Element::Input(InputField::new(id)));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Verify that every id in `ids` is present, reporting the first
    /// missing one.
    pub fn require(&self, ids: &[&str]) -> Result<(), DashboardError> {
        for id in ids {
            if !self.contains(id) {
                return Err(DashboardError::TargetNotFound((*id).to_string()));
            }
        }
        Ok(())
    }

    pub fn elements(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.elements.iter().map(|(id, el)| (id.as_str(), el))
    }

    pub fn table_body(&self, id: &str) -> Result<&TableBody, DashboardError> {
        match self.elements.get(id) {
            Some(Element::TableBody(body)) => Ok(body),
            _ => Err(DashboardError::TargetNotFound(id.to_string())),
        }
    }

    pub fn table_body_mut(&mut self, id: &str) -> Result<&mut TableBody, DashboardError> {
        match self.elements.get_mut(id) {
            Some(Element::TableBody(body)) => Ok(body),
            _ => Err(DashboardError::TargetNotFound(id.to_string())),
        }
    }

    pub fn chart_surface(&self, id: &str) -> Result<&ChartSurface, DashboardError> {
        match self.elements.get(id) {
            Some(Element::Canvas(surface)) => Ok(surface),
            _ => Err(DashboardError::TargetNotFound(id.to_string())),
        }
    }

    pub fn chart_surface_mut(&mut self, id: &str) -> Result<&mut ChartSurface, DashboardError> {
        match self.elements.get_mut(id) {
            Some(Element::Canvas(surface)) => Ok(surface),
            _ => Err(DashboardError::TargetNotFound(id.to_string())),
        }
    }

    pub fn form_mut(&mut self, id: &str) -> Result<&mut MappingForm, DashboardError> {
        match self.elements.get_mut(id) {
            Some(Element::Form(form)) => Ok(form),
            _ => Err(DashboardError::TargetNotFound(id.to_string())),
        }
    }

    pub fn input_value(&self, id: &str) -> Result<String, DashboardError> {
        match self.elements.get(id) {
            Some(Element::Input(input)) => Ok(input.value().to_string()),
            _ => Err(DashboardError::TargetNotFound(id.to_string())),
        }
    }

    pub fn set_input_value(&mut self, id: &str, value: &str) -> Result<(), DashboardError> {
        match self.elements.get_mut(id) {
            Some(Element::Input(input)) => {
                input.set_value(value);
                Ok(())
            }
            _ => Err(DashboardError::TargetNotFound(id.to_string())),
        }
    }
}
