use anyhow::Result;

/// Everything in fittrack happens on one thread, one command at a time.
pub fn single_thread_runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
