//! Render pipeline benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use richblocks::{render_message, ChannelDirectory, UserDirectory};
use serde_json::json;

fn message_blocks() -> Vec<richblocks::Block> {
    let items: Vec<_> = (0..20)
        .map(|i| {
            json!({
                "type": "rich_text_section",
                "elements": [
                    {"type": "user", "user_id": format!("U{}", i % 50)},
                    {"type": "text", "text": format!(" said thing {} ", i), "style": {"bold": true}},
                    {"type": "emoji", "name": "rocket"}
                ]
            })
        })
        .collect();

    let blocks = json!([
        {
            "type": "rich_text",
            "elements": [
                {"type": "rich_text_section", "elements": [
                    {"type": "text", "text": "summary of the day"},
                    {"type": "channel", "channel_id": "C1"}
                ]},
                {"type": "rich_text_list", "style": "ordered", "indent": 0, "border": 1, "elements": items},
                {"type": "rich_text_quote", "elements": [
                    {"type": "text", "text": "first line\nsecond line"}
                ]},
                {"type": "rich_text_preformatted", "elements": [
                    {"type": "text", "text": "fn main() { println!(\"hi\"); }"}
                ]}
            ]
        }
    ]);

    richblocks::model::blocks_from_json(&blocks.to_string()).unwrap()
}

fn bench_render_message(c: &mut Criterion) {
    let blocks = message_blocks();
    let users: UserDirectory = (0..50)
        .map(|i| (format!("U{}", i), format!("user-{}", i)))
        .collect();
    let channels: ChannelDirectory = [("C1", "general")].into_iter().collect();

    c.bench_function("render_message", |b| {
        b.iter(|| render_message(black_box(&blocks), &[], &users, &channels).unwrap())
    });
}

criterion_group!(benches, bench_render_message);
criterion_main!(benches);
