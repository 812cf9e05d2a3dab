//! Process-wide tokio runtime.
//!
//! egui owns the main thread, so network calls run on this runtime instead.
//! `main` enters it once at startup; after that `tokio::spawn` from the UI
//! thread lands here and results come back through the app's event channel.
//!
//! ```rust,no_run
//! let runtime = terminal::utils::runtime::get().expect("runtime");
//! let _guard = runtime.enter();
//! ```

use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Runtime};

pub static TOKIO_RT: OnceCell<Runtime> = OnceCell::new();

/// The shared runtime, built on first use.
pub fn get() -> std::io::Result<&'static Runtime> {
    TOKIO_RT.get_or_try_init(|| {
        Builder::new_multi_thread()
            .enable_all()
            .thread_name("stocksense-io")
            .build()
    })
}
