use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quizcraft::{parse_questions, QuizDraft, QuizHtmlGenerator};

fn csv_of(size: usize) -> String {
    (0..size)
        .map(|i| format!("Question {}?,Option A {},Option B {},Option C {}\n", i, i, i, i))
        .collect()
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 1000, 10000].iter() {
        let text = csv_of(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let questions = parse_questions(black_box(&text)).unwrap();
                black_box(questions);
            });
        });
    }

    group.finish();
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let generator = QuizHtmlGenerator::default();

    for size in [10, 100, 1000].iter() {
        let mut draft = QuizDraft::new();
        draft.load_csv(&csv_of(*size)).unwrap();
        for id in 1..=*size as u32 {
            draft.set_correct_answer(id, 0, true).unwrap();
        }
        let quiz = draft.build().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let html = generator.generate(black_box(&quiz)).unwrap();
                black_box(html);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_generate);
criterion_main!(benches);
