use ratatui::layout::Rect;

/// Height of the prompt box, borders included.
const PROMPT_HEIGHT: u16 = 3;
/// Height of the status line under the prompt.
const STATUS_HEIGHT: u16 = 1;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Regions of the body: prompt box, status line, image region.
pub struct BodyRegions {
    pub prompt: Rect,
    pub status: Rect,
    pub image: Rect,
}

pub fn body_regions(body: Rect) -> BodyRegions {
    let prompt_height = PROMPT_HEIGHT.min(body.height);
    let status_height = STATUS_HEIGHT.min(body.height.saturating_sub(prompt_height));
    let prompt = Rect {
        height: prompt_height,
        ..body
    };
    let status = Rect {
        y: body.y + prompt_height,
        height: status_height,
        ..body
    };
    let image = Rect {
        y: body.y + prompt_height + status_height,
        height: body.height.saturating_sub(prompt_height + status_height),
        ..body
    };
    BodyRegions {
        prompt,
        status,
        image,
    }
}

/// A `width` x `height` rect centered in `area`, clamped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
