//! Background video cover sizing.
//!
//! An embedded player cannot use `object-fit: cover`, so the iframe is sized
//! explicitly: fill the container width at 16:9 and, when that leaves the
//! container short, grow to its height instead. The overflow is cropped by
//! the container.

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

pub const ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Iframe `(width, height)` that covers a `container_w` x `container_h` box.
#[must_use]
pub fn cover_size(container_w: f64, container_h: f64) -> (f64, f64) {
    let width = container_w.max(0.0);
    let height = width / ASPECT_RATIO;
    if height < container_h {
        (container_h * ASPECT_RATIO, container_h)
    } else {
        (width, height)
    }
}

/// Measure the element with `container_id` and return its cover size.
pub fn measure_cover(container_id: &str) -> Option<(f64, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let el = web_sys::window()?.document()?.get_element_by_id(container_id)?;
        let rect = el.get_bounding_client_rect();
        Some(cover_size(rect.width(), rect.height()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = container_id;
        None
    }
}
