mod entry;
mod logger;

use loadshot::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
