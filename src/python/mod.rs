//! Python bindings for the environment contract.
//!
//! The training loop of a MuZero system usually lives in Python. These
//! bindings expose the bundled games through the same checked lifecycle the
//! Rust driver uses.
//!
//! # Quick Start
//!
//! ```python
//! import muzero_env
//!
//! game = muzero_env.Game("tictactoe", seed=42)
//! observation = game.reset()
//! done = False
//! while not done:
//!     action = game.legal_actions()[0]
//!     observation, reward, done = game.step(action)
//! game.close()
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// muzero_env: game environments for MuZero-style self-play.
#[pymodule]
fn muzero_env(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add("GAMES", crate::games::GameKind::ALL.map(|k| k.name()).to_vec())?;
    Ok(())
}
