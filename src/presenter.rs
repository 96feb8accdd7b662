//! View models for the result grid and the detail overlay, plus the plain
//! text rendering used by the non-interactive commands.

use crate::model::Meal;
use log::debug;
use serde::Serialize;
use std::fmt;

pub const WATCH_TUTORIAL: &str = "Watch Tutorial";

/// One ingredient line derived from a populated slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    /// 1-based slot position
    pub slot: usize,
    pub measure: Option<String>,
    pub name: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.measure {
            Some(measure) => write!(f, "{} {}", measure, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Derive the ingredient list in slot order, skipping slots whose
/// ingredient is missing or blank.
pub fn ingredients(meal: &Meal) -> Vec<Ingredient> {
    meal.slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| {
            let name = slot.ingredient.as_deref()?.trim();
            if name.is_empty() {
                return None;
            }
            let measure = slot
                .measure
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string);
            Some(Ingredient {
                slot: i + 1,
                measure,
                name: name.to_string(),
            })
        })
        .collect()
}

/// One paragraph per line of the instructions, blank lines included.
pub fn paragraphs(instructions: &str) -> Vec<String> {
    instructions
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// An outbound link that opens outside this program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub url: String,
    pub label: &'static str,
}

impl ExternalLink {
    /// Hand the URL to the system browser as a detached process, so the
    /// opened page gets a fresh context with no handle back to us.
    pub fn open(&self) -> std::io::Result<()> {
        debug!("opening {}", self.url);
        open::that_detached(&self.url)
    }
}

/// The tutorial link, present only when the record carries a video URL.
pub fn video_link(meal: &Meal) -> Option<ExternalLink> {
    meal.video
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| ExternalLink {
            url: url.to_string(),
            label: WATCH_TUTORIAL,
        })
}

/// What a result card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub origin: String,
    pub category: String,
}

impl From<&Meal> for CardView {
    fn from(meal: &Meal) -> Self {
        CardView {
            id: meal.id.clone(),
            name: meal.name.clone(),
            thumbnail: meal.thumbnail.clone(),
            origin: meal.area.clone(),
            category: meal.category.clone(),
        }
    }
}

/// One card per result, in the order upstream returned them.
pub fn cards(results: &[Meal]) -> Vec<CardView> {
    results.iter().map(CardView::from).collect()
}

/// Everything the detail overlay shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub origin: String,
    pub category: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub paragraphs: Vec<String>,
    pub video: Option<ExternalLink>,
    pub source: Option<String>,
}

impl From<&Meal> for DetailView {
    fn from(meal: &Meal) -> Self {
        DetailView {
            id: meal.id.clone(),
            name: meal.name.clone(),
            thumbnail: meal.thumbnail.clone(),
            origin: meal.area.clone(),
            category: meal.category.clone(),
            tags: meal.tags.clone(),
            ingredients: ingredients(meal),
            paragraphs: paragraphs(&meal.instructions),
            video: video_link(meal),
            source: meal.source.clone(),
        }
    }
}

/// Plain text rendering of a card list.
pub fn render_cards(cards: &[CardView]) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        out.push_str(&format!("{:>2}. {}\n", i + 1, card.name));
        out.push_str(&format!("    Origin:   {}\n", card.origin));
        out.push_str(&format!("    Category: {}\n", card.category));
        out.push_str(&format!("    Image:    {}\n", card.thumbnail));
    }
    out
}

/// Plain text rendering of the detail view.
pub fn render_detail(detail: &DetailView) -> String {
    let mut out = format!("# {}\n\n", detail.name);
    out.push_str(&format!("Origin:   {}\n", detail.origin));
    out.push_str(&format!("Category: {}\n", detail.category));
    if !detail.tags.is_empty() {
        out.push_str(&format!("Tags:     {}\n", detail.tags.join(", ")));
    }
    out.push_str(&format!("Image:    {}\n", detail.thumbnail));

    out.push_str("\n## Ingredients\n\n");
    for ingredient in &detail.ingredients {
        out.push_str(&format!("- {}\n", ingredient));
    }

    out.push_str("\n## Instructions\n\n");
    for paragraph in &detail.paragraphs {
        out.push_str(paragraph);
        out.push('\n');
    }

    if let Some(link) = &detail.video {
        out.push_str(&format!("\n{}: {}\n", link.label, link.url));
    }
    if let Some(source) = &detail.source {
        out.push_str(&format!("Source: {}\n", source));
    }
    out
}
