//! A headless swipe-to-delete list of fifteen rows.
//!
//! Scripts a few gestures against the widget: a long swipe that deletes a
//! row and shorter ones that snap back. Animations run on the system clock, the
//! same way a real event loop would drive them.
//!
//! Run with: cargo run -p swipe-list --example deletable_list
//! Set `RUST_LOG=swipe_list=trace` to follow every tick.

use std::thread;

use swipe_list::prelude::*;
use tracing_subscriber::EnvFilter;

type Rows = ListRowProvider<&'static str>;

const WIDTH: f32 = 320.0;
const ROW_HEIGHT: f32 = 48.0;

const ITEMS: [&str; 15] = [
    "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen",
];

/// Prints draw calls instead of rasterising them.
struct ConsolePainter<'a> {
    rows: &'a Rows,
    alpha: f32,
    dx: f32,
}

impl RowPainter for ConsolePainter<'_> {
    fn save_layer_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn translate(&mut self, dx: f32, _dy: f32) {
        self.dx += dx;
    }

    fn draw_row(&mut self, view: ViewId) {
        if let Some(row) = self.rows.view(view) {
            println!(
                "  {:>2} {:<10} dx={:>6.1} alpha={:.2}",
                row.bound_row, row.label, self.dx, self.alpha
            );
        }
    }

    fn restore(&mut self) {
        self.alpha = 1.0;
    }
}

fn row_y(index: usize) -> f32 {
    index as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0
}

fn print_rows(list: &mut SwipeListView<Rows>, views: &mut Vec<ViewId>) -> swipe_list::Result<()> {
    let count = list.row_count();
    if views.len() > count {
        for view in views.drain(count..) {
            list.release_view(view);
        }
    }
    for index in 0..count {
        let recycled = views.get(index).copied();
        let view = list.render_row(index, recycled)?;
        match views.get_mut(index) {
            Some(slot) => *slot = view,
            None => views.push(view),
        }
    }

    let Some(rows) = list.row_provider() else {
        return Ok(());
    };
    for view in views.iter() {
        let mut painter = ConsolePainter {
            rows,
            alpha: 1.0,
            dx: 0.0,
        };
        list.paint_row(&mut painter, *view);
    }
    Ok(())
}

/// Runs the animation loop until the widget is idle.
fn settle(list: &mut SwipeListView<Rows>) {
    while let Some(wait) = list.time_until_next_tick() {
        thread::sleep(wait);
        list.process_timers();
    }
}

fn swipe(list: &mut SwipeListView<Rows>, index: usize, distance: f32) {
    let y = row_y(index);
    let start = 16.0;
    list.handle_touch(&TouchEvent::down(start, y));
    for step in 1..=4 {
        list.handle_touch(&TouchEvent::moved(start + distance * step as f32 / 4.0, y));
    }
    let consumed = list.handle_touch(&TouchEvent::up(start + distance, y));
    tracing::info!(index, distance, consumed, "swipe released");
}

fn main() -> swipe_list::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,swipe_list=debug")),
        )
        .init();

    let mut list = SwipeListView::new(FixedHeightLocator::new(ROW_HEIGHT))
        .with_width(WIDTH)
        .with_tag_key(TagKey::new(1))
        .with_row_provider(Rows::new(ITEMS.to_vec()))?;

    list.set_item_delete_listener(|list: &mut SwipeListView<Rows>, position: usize| {
        if let Some(removed) = list.row_provider_mut().and_then(|rows| rows.remove(position)) {
            tracing::info!(position, removed, "row deleted");
        }
        list.notify_data_changed();
    });

    let mut views = Vec::new();
    println!("initial rows:");
    print_rows(&mut list, &mut views)?;

    // Halfway through a swipe the dragged row is shifted and faded.
    let y = row_y(6);
    list.handle_touch(&TouchEvent::down(16.0, y));
    list.handle_touch(&TouchEvent::moved(136.0, y));
    println!("dragging \"Seven\":");
    print_rows(&mut list, &mut views)?;
    list.handle_touch(&TouchEvent::up(136.0, y));
    settle(&mut list);

    swipe(&mut list, 2, 220.0);
    settle(&mut list);

    swipe(&mut list, 4, -90.0);
    settle(&mut list);

    println!("after deleting \"Three\":");
    print_rows(&mut list, &mut views)?;
    Ok(())
}
