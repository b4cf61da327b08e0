mod use_reveal_timer;

pub use use_reveal_timer::use_reveal_timer;
