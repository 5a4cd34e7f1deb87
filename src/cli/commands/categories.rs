use crate::core::dashboard::render_legend;
use crate::errors::AppResult;

pub fn handle() -> AppResult<()> {
    print!("{}", render_legend());
    Ok(())
}
