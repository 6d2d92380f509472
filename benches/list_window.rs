//! List windowing benchmarks.
//!
//! Rendering cost must follow the viewport, not the number of receipts:
//! a frame at the end of 100k receipts should cost what a frame of 100 does.
//!
//! Run with: cargo bench --bench list_window

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;
use rrview::model::{KeyAction, ReadReceipt, ReceiptId, ReceiptUser, UserId};
use rrview::state::ListScroll;
use rrview::theme::ThemeName;
use rrview::time_format::{DisplayZone, TimeFormatter};
use rrview::view::{ColorConfig, ReceiptList, ReceiptStyles, visible_rows};

const SIZES: [usize; 3] = [100, 10_000, 100_000];
const VIEWPORT: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 60,
};

fn receipts(count: usize) -> Vec<ReadReceipt> {
    (0..count)
        .map(|i| {
            ReadReceipt::new(
                ReceiptId::new(format!("r{}", i)).unwrap(),
                1_610_000_000_000 + i as i64 * 1_000,
                ReceiptUser::new(
                    UserId::new(format!("u{}", i)).unwrap(),
                    format!("reader.{}", i),
                    format!("Reader {}", i),
                ),
            )
        })
        .collect()
}

/// Scroll state positioned at the start, middle or end of the list.
fn scrolled(position: &str, total: usize) -> ListScroll {
    let mut scroll = ListScroll::default();
    match position {
        "end" => {
            scroll.apply(KeyAction::ScrollToBottom, total, VIEWPORT.height);
        }
        "middle" => {
            while scroll.offset() < total / 2
                && scroll.apply(KeyAction::PageDown, total, VIEWPORT.height)
            {}
        }
        _ => {}
    }
    scroll
}

fn bench_visible_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_rows");
    for total in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter(|| visible_rows(black_box(total), black_box(total / 2), VIEWPORT.height))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let formatter = TimeFormatter::new("HH:mm", DisplayZone::Utc);
    let colors = ColorConfig::new(true);
    let styles = ReceiptStyles::for_theme(ThemeName::Dark, colors);

    let mut group = c.benchmark_group("render_receipt_list");
    for total in SIZES {
        let list = receipts(total);
        for position in ["start", "middle", "end"] {
            let id = BenchmarkId::new(position, total);
            group.bench_with_input(id, &list, |b, list| {
                let mut buf = Buffer::empty(VIEWPORT);
                let mut scroll = scrolled(position, list.len());
                b.iter(|| {
                    ReceiptList::new(list, &formatter, styles, colors).render(
                        VIEWPORT,
                        &mut buf,
                        &mut scroll,
                    );
                    black_box(&buf);
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_visible_rows, bench_render);
criterion_main!(benches);
