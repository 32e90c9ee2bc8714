//! Split the terminal area into header, body, footer, and the body into form rows.

use ratatui::layout::Rect;

use crate::utils::{centered_column, horizontal_padding, FIELD_HEIGHT, FORM_MAX_WIDTH, ROW_GAP};

/// Fixed height for the header (title line + border).
pub const HEADER_HEIGHT: u16 = 2;

/// Fixed height for the footer: one shortcut hint line.
pub const FOOTER_HEIGHT: u16 = 1;

/// Regions for the main screen: header, body, footer.
#[derive(Debug, Clone)]
pub struct MainSplits {
    pub header: Rect,
    /// Middle area. May have zero height if area too small.
    pub body: Rect,
    pub footer: Rect,
}

/// Split `area` into header (fixed top), body (middle), footer (fixed bottom).
pub fn main_splits(area: Rect) -> MainSplits {
    let (header, rest) = vertical_split(area, HEADER_HEIGHT);
    let body_h = rest.height.saturating_sub(FOOTER_HEIGHT);
    let (body, footer) = vertical_split(rest, body_h);
    MainSplits {
        header,
        body,
        footer,
    }
}

/// One rect per control of the calculator, top to bottom.
#[derive(Debug, Clone)]
pub struct FormRows {
    pub bill_amount: Rect,
    pub tip_percentage: Rect,
    pub round_up: Rect,
    pub tip_amount: Rect,
}

/// Lay the form out in a centered column of `body`. Rows that do not fit get zero height.
pub fn form_rows(body: Rect) -> FormRows {
    let column = centered_column(horizontal_padding(body), FORM_MAX_WIDTH);
    let (_, rest) = vertical_split(column, ROW_GAP);
    let (bill_amount, rest) = vertical_split(rest, FIELD_HEIGHT);
    let (_, rest) = vertical_split(rest, ROW_GAP);
    let (tip_percentage, rest) = vertical_split(rest, FIELD_HEIGHT);
    let (_, rest) = vertical_split(rest, ROW_GAP);
    let (round_up, rest) = vertical_split(rest, 1);
    let (_, rest) = vertical_split(rest, ROW_GAP);
    let (tip_amount, _) = vertical_split(rest, 1);
    FormRows {
        bill_amount,
        tip_percentage,
        round_up,
        tip_amount,
    }
}

/// Split a vertical strip into top and bottom with a given top height.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let top_h = top_height.min(area.height);
    let bottom_h = area.height.saturating_sub(top_h);
    let top = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: top_h,
    };
    let bottom = Rect {
        x: area.x,
        y: area.y.saturating_add(top_h),
        width: area.width,
        height: bottom_h,
    };
    (top, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_splits_assigns_regions() {
        let s = main_splits(Rect::new(0, 0, 80, 24));
        assert_eq!(s.header.height, 2);
        assert_eq!(s.footer.height, 1);
        assert_eq!(s.body.height, 21);
        assert_eq!(s.body.y, 2);
        assert_eq!(s.footer.y, 23);
    }

    #[test]
    fn main_splits_tiny_terminal() {
        let s = main_splits(Rect::new(0, 0, 80, 2));
        assert_eq!(s.body.height, 0);
        assert_eq!(s.header.height, HEADER_HEIGHT);
    }

    #[test]
    fn form_rows_stack_in_order() {
        let rows = form_rows(Rect::new(0, 2, 80, 21));
        assert_eq!(rows.bill_amount.y, 3);
        assert_eq!(rows.bill_amount.height, FIELD_HEIGHT);
        assert_eq!(rows.tip_percentage.y, 7);
        assert_eq!(rows.round_up.y, 11);
        assert_eq!(rows.tip_amount.y, 13);
        assert_eq!(rows.tip_amount.height, 1);
        assert!(rows.bill_amount.width <= FORM_MAX_WIDTH);
    }

    #[test]
    fn form_rows_collapse_when_short() {
        let rows = form_rows(Rect::new(0, 0, 80, 5));
        assert_eq!(rows.bill_amount.height, 3);
        assert_eq!(rows.tip_percentage.height, 0);
        assert_eq!(rows.tip_amount.height, 0);
    }

    #[test]
    fn vertical_split_larger_than_area() {
        let (top, bottom) = vertical_split(Rect::new(0, 0, 80, 5), 10);
        assert_eq!(top.height, 5);
        assert_eq!(bottom.height, 0);
    }
}
