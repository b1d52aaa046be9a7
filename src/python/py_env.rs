//! Environment bindings for Python.

use numpy::{PyArray1, PyArrayDyn, PyArrayMethods};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Action, Observation};
use crate::env::{Checked, Environment};
use crate::error::EnvError;
use crate::games::GameKind;

fn to_py_err(err: EnvError) -> PyErr {
    match err {
        EnvError::UnknownGame(_) | EnvError::ActionOutOfSpace { .. } | EnvError::IllegalAction { .. } => {
            PyValueError::new_err(err.to_string())
        }
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

fn to_numpy<'py>(py: Python<'py>, obs: Observation) -> PyResult<Bound<'py, PyArrayDyn<f32>>> {
    PyArray1::from_vec_bound(py, obs.data).reshape(obs.shape)
}

/// Python wrapper for a bundled game.
///
/// Calls are checked against the environment lifecycle: stepping after the
/// episode ended or using a closed game raises `RuntimeError`.
#[pyclass(name = "Game")]
pub struct PyGame {
    kind: GameKind,
    env: Checked<Box<dyn Environment + Send + Sync>>,
}

#[pymethods]
impl PyGame {
    /// Create a game by name.
    ///
    /// # Arguments
    /// - name: "tictactoe", "twentyone" or "gridworld"
    /// - seed: RNG seed; None seeds from entropy
    #[new]
    #[pyo3(signature = (name, seed = None))]
    fn new(name: &str, seed: Option<u64>) -> PyResult<Self> {
        let kind: GameKind = name.parse().map_err(to_py_err)?;
        Ok(Self {
            kind,
            env: Checked::new(kind.build(seed)),
        })
    }

    /// Start a new episode; returns the initial observation.
    fn reset<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<f32>>> {
        let obs = self.env.reset().map_err(to_py_err)?;
        to_numpy(py, obs)
    }

    /// Apply an action; returns (observation, reward, done).
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: u32,
    ) -> PyResult<(Bound<'py, PyArrayDyn<f32>>, f32, bool)> {
        let (obs, reward, done) = self
            .env
            .step(Action::new(action))
            .map_err(to_py_err)?
            .into_tuple();
        Ok((to_numpy(py, obs)?, reward, done))
    }

    /// The player to move.
    fn to_play(&self) -> PyResult<u8> {
        self.env.to_play().map(|p| p.0).map_err(to_py_err)
    }

    /// Legal actions for the player to move.
    fn legal_actions(&self) -> PyResult<Vec<u32>> {
        self.env
            .legal_actions()
            .map(|actions| actions.into_iter().map(|a| a.0).collect())
            .map_err(to_py_err)
    }

    /// Print the current state to stdout.
    fn render(&self) -> PyResult<()> {
        self.env.render(&mut std::io::stdout()).map_err(to_py_err)
    }

    /// Ask for an action on stdin. The GIL is released while waiting for
    /// input so other Python threads keep running.
    fn human_to_action(&self, py: Python<'_>) -> PyResult<u32> {
        py.allow_threads(|| self.env.human_to_action())
            .map(|a| a.0)
            .map_err(to_py_err)
    }

    /// Label an action.
    fn action_to_string(&self, action: u32) -> PyResult<String> {
        self.env
            .action_to_string(Action::new(action))
            .map_err(to_py_err)
    }

    /// Release the game's resources.
    fn close(&mut self) -> PyResult<()> {
        self.env.close().map_err(to_py_err)
    }

    #[getter]
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[getter]
    fn action_space_size(&self) -> u32 {
        self.env.info().action_space.size()
    }

    #[getter]
    fn players(&self) -> Vec<u8> {
        self.env.info().players.iter().map(|p| p.0).collect()
    }

    #[getter]
    fn observation_shape(&self) -> Vec<usize> {
        self.env.info().observation_shape.clone()
    }

    /// Whether legal_actions is exact (otherwise illegal moves are penalized).
    #[getter]
    fn exact_legality(&self) -> bool {
        self.env.info().legality.is_exact()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(name={}, phase={:?}, episodes={})",
            self.kind,
            self.env.phase(),
            self.env.episodes()
        )
    }
}
