use crate::layout::GridCell;

pub const APP_NAME: &str = "ButtonDeck";

/// Window title for a document backed by `file_name`, or a new one.
#[inline]
pub fn window_title(file_name: Option<&str>) -> String {
    match file_name {
        Some(name) => format!("{APP_NAME} - {name}"),
        None => format!("{APP_NAME} - New configuration"),
    }
}

/// Plain-text grid: icon buttons show `[*]`, others their label.
pub fn grid_to_text(rows: &[Vec<GridCell>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.has_icon {
                        "[*]".to_string()
                    } else {
                        format!("[{}]", cell.label)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
