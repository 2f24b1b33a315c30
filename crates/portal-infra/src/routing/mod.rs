pub mod memory_router;

pub use memory_router::MemoryRouter;
