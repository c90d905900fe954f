use std::thread;

use consgc::{EngineLifecycle, GcAllocator};

// The shim adds no locks of its own; concurrent callers lean entirely on
// the engine's internal thread-safety. Initialization happens once,
// before any thread spawns, per the documented precondition.
#[test]
fn parallel_allocate_resize_free() {
    let lifecycle = EngineLifecycle::global();
    lifecycle.ensure_initialized();

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            thread::spawn(move || {
                let gc = GcAllocator::new();
                for round in 1..=64usize {
                    let len = worker * 64 + round;
                    let align = 1usize << (round % 7);
                    let block = gc.allocate(len, align).expect("allocation");
                    assert_eq!(block.as_ptr() as usize % align, 0);

                    unsafe {
                        assert!(gc.size_of(block) >= len);
                        // Shrink always lands in place.
                        assert!(gc.resize(block, 1).is_some());
                        gc.free(block);
                    }
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker panicked");
    }

    lifecycle.collect_full();
    assert!(lifecycle.heap_size() > 0);
}
