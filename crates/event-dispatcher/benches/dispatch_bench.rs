use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use event_dispatcher::{
    Event, EventData, EventDispatcher, EventHandler, HandlerResult, SharedEventDispatcher,
};

struct PriceChanged {
    cents: u64,
}

impl EventData for PriceChanged {
    const EVENT_NAME: &'static str = "PriceChangedEvent";
}

#[derive(Default)]
struct Summing(AtomicU64);

impl EventHandler<PriceChanged> for Summing {
    fn handle(&self, event: &Event<PriceChanged>) -> HandlerResult {
        self.0.fetch_add(event.data().cents, Ordering::Relaxed);
        Ok(())
    }
}

fn dispatcher_with(handlers: usize) -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();
    for _ in 0..handlers {
        dispatcher.subscribe(Arc::new(Summing::default()) as Arc<dyn EventHandler<PriceChanged>>);
    }
    dispatcher
}

fn bench_notify_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatcher/notify");
    for handlers in [1usize, 8, 64] {
        let dispatcher = dispatcher_with(handlers);
        group.bench_with_input(BenchmarkId::from_parameter(handlers), &handlers, |b, _| {
            b.iter(|| {
                dispatcher
                    .notify(&Event::new(PriceChanged { cents: 1000 }))
                    .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_shared_notify(c: &mut Criterion) {
    let shared = SharedEventDispatcher::from(dispatcher_with(8));

    c.bench_function("dispatcher/shared_notify_8", |b| {
        b.iter(|| {
            shared
                .notify(&Event::new(PriceChanged { cents: 1000 }))
                .unwrap();
        });
    });
}

fn bench_notify_miss(c: &mut Criterion) {
    let dispatcher = EventDispatcher::new();

    c.bench_function("dispatcher/notify_without_handlers", |b| {
        b.iter(|| {
            dispatcher
                .notify(&Event::new(PriceChanged { cents: 1000 }))
                .unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_notify_fan_out,
    bench_shared_notify,
    bench_notify_miss
);
criterion_main!(benches);
