pub use hover;

mod bridge;
mod dom;
mod manager;
mod start;

pub use manager::TooltipManager;

type Res<T> = Result<T, String>;

fn err<T, S: ToString>(s: S) -> Res<T> {
    Err(s.to_string())
}
