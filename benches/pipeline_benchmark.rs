use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fitness_ai_coach::error::PipelineError;
use fitness_ai_coach::models::Activity;
use fitness_ai_coach::services::{envelope::extract_inner_json, extract};
use serde_json::json;

fn benchmark_extraction(c: &mut Criterion) {
    let activity: Activity = serde_json::from_value(json!({
        "id": "act-1",
        "userId": "user-1",
        "type": "RUNNING",
        "duration": 45,
        "caloriesBurned": 520.0,
        "additionalMetrics": {"distanceKm": 8.2, "avgHeartRate": 148}
    }))
    .expect("Failed to build activity");

    let inner = json!({
        "analysis": {
            "overall": "Consistent aerobic effort",
            "pace": "Negative split over the last 2 km",
            "heartRate": "Mostly zone 3",
            "caloriesBurned": "In line with distance"
        },
        "improvements": [
            {"area": "Cadence", "recommendation": "Aim for 175 spm"},
            {"area": "Warm-up", "recommendation": "Add 10 minutes of easy jogging"}
        ],
        "suggestions": [
            {"workout": "Tempo run", "description": "20 minutes at threshold pace"}
        ],
        "safety": ["Hydrate before and after", "Replace worn shoes"]
    });

    // Real responses arrive fenced inside the candidates envelope
    let raw = json!({
        "candidates": [{
            "content": {"parts": [{"text": format!("```json\n{inner:#}\n```")}], "role": "model"},
            "finishReason": "STOP"
        }]
    })
    .to_string();

    let mut group = c.benchmark_group("response_extraction");

    group.bench_function("unwrap_envelope", |b| {
        b.iter(|| extract_inner_json(black_box(&raw)))
    });

    group.bench_function("envelope_to_recommendation", |b| {
        b.iter(|| {
            extract_inner_json(black_box(&raw))
                .map_err(PipelineError::from)
                .and_then(|inner| extract::extract_recommendation(&inner, &activity))
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_extraction);
criterion_main!(benches);
