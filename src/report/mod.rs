/*!
 * Reports
 * Plain-text rendering of scheduling results
 */

mod gantt;
mod table;

pub use gantt::render_gantt;
pub use table::{best_by_waiting, render_comparison, render_result};
