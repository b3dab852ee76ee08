use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use memory_match::core::{GameSnapshot, MemoryGame};
use memory_match::types::BoardSize;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn snapshot_and_query_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut game = MemoryGame::new(BoardSize::Hard, 1);
    let mut snap = GameSnapshot::default();

    // Warm-up.
    game.snapshot_into(&mut snap);
    let _ = game.is_card_face_up(0);

    let allocs = with_alloc_counting(|| {
        // A renderer refreshes the snapshot every frame.
        for _ in 0..200 {
            game.snapshot_into(&mut snap);
        }

        // Per-card queries run once per rendered cell.
        for _ in 0..50 {
            for position in 0..snap.card_count {
                let _ = game.is_card_face_up(position);
                let _ = game.image_for(position);
            }
            let _ = game.has_won();
            let _ = game.num_moves();
            let _ = game.pending_card();
        }

        // Reverting face-down cards touches every card in place.
        for _ in 0..25 {
            let _ = game.reset_unmatched();
        }
    });

    assert!(allocs == 0);
}
