/// Masonry grid for the gallery screen
///
/// Items keep their dataset order and are dealt round-robin into 1, 2 or 4
/// columns depending on the viewport width. The layout is recomputed from
/// scratch on load and after every settled resize.

use iced::widget::{button, column, container, image, row, text, Column};
use iced::{Element, Length};

use crate::state::catalog::Catalog;
use crate::Message;

/// Widest viewport that still gets a single column
pub const SINGLE_COLUMN_MAX_WIDTH: f32 = 384.0;
/// Widest viewport that still gets two columns
pub const TWO_COLUMN_MAX_WIDTH: f32 = 768.0;

/// Dataset position whose tile is moved to the right-hand side at 2 and 4
/// columns to balance tall and wide paintings in the shipped dataset
pub const PINNED_ITEM: usize = 14;

const GUTTER: f32 = 24.0;

/// Column count for a viewport width
pub fn column_count(width: f32) -> usize {
    if width <= SINGLE_COLUMN_MAX_WIDTH {
        1
    } else if width <= TWO_COLUMN_MAX_WIDTH {
        2
    } else {
        4
    }
}

/// Column an item lands in
fn target_column(position: usize, columns: usize) -> usize {
    if position == PINNED_ITEM {
        match columns {
            4 => return 3,
            2 => return 1,
            _ => {}
        }
    }
    position % columns
}

/// Item positions per column, each column in dataset order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MasonryLayout {
    columns: Vec<Vec<usize>>,
}

impl MasonryLayout {
    /// Partition `item_count` items for a viewport `width` pixels wide
    pub fn compute(item_count: usize, width: f32) -> Self {
        let count = column_count(width);
        let mut columns = vec![Vec::new(); count];

        for position in 0..item_count {
            columns[target_column(position, count)].push(position);
        }

        Self { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Vec<usize>] {
        &self.columns
    }
}

/// A grid tile, paired by position with an artwork in the catalog
#[derive(Debug, Clone)]
pub struct VisualItem {
    /// Position of the artwork this tile opens
    pub index: usize,
    pub title: String,
    pub artist: String,
    pub thumbnail: image::Handle,
}

impl VisualItem {
    /// One tile per artwork, in dataset order
    pub fn from_catalog(catalog: &Catalog) -> Vec<Self> {
        catalog
            .iter()
            .enumerate()
            .map(|(index, record)| VisualItem {
                index,
                title: record.name.clone(),
                artist: record.artist.name.clone(),
                thumbnail: image::Handle::from_path(catalog.resolve_asset(record.grid_image())),
            })
            .collect()
    }
}

fn tile(item: &VisualItem) -> Element<'_, Message> {
    let caption = column![
        text(&item.title).size(20),
        text(&item.artist).size(13),
    ]
    .spacing(6)
    .padding(16);

    button(column![
        image(item.thumbnail.clone()).width(Length::Fill),
        caption,
    ])
    .on_press(Message::OpenArtwork(item.index))
    .padding(0)
    .style(button::text)
    .into()
}

/// Build the grid. Tiles without a matching item are skipped.
pub fn view<'a>(layout: &'a MasonryLayout, items: &'a [VisualItem]) -> Element<'a, Message> {
    let columns = layout.columns().iter().map(|positions| -> Element<'a, Message> {
        Column::with_children(
            positions
                .iter()
                .filter_map(|&position| items.get(position))
                .map(tile),
        )
        .spacing(GUTTER)
        .width(Length::FillPortion(1))
        .into()
    });

    container(row(columns).spacing(GUTTER))
        .padding(GUTTER)
        .width(Length::Fill)
        .into()
}
