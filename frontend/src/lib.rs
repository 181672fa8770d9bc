pub mod app;
pub mod components;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod utils;

#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
/// SAFETY: leptos use single threaded
/// Change to lock allocator when we have multithread in web
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };
