//! Lazy per-candidate pipeline over an event store.
//!
//! A [`Frame`] chains column definitions and filters, then fills a
//! histogram in a single pass. Stages apply per candidate, in declaration
//! order: a filter rejects the candidate for all later stages, a define
//! extends the candidate's value environment. Closure-based and
//! expression-based stages flow through the same executor, so the two
//! front-ends cannot diverge.

use crate::error::{Error, Result};
use crate::event::EventStore;
use crate::expr::CompiledExpr;
use crate::histogram::{Axis, FlowPolicy, Hist1D};

type RowFn = Box<dyn Fn(&[f64]) -> f64>;
type RowPred = Box<dyn Fn(&[f64]) -> bool>;

enum Stage {
    DefineFn { name: String, inputs: Vec<String>, func: RowFn },
    DefineExpr { name: String, expr: CompiledExpr },
    FilterFn { inputs: Vec<String>, pred: RowPred },
    FilterExpr { expr: CompiledExpr },
}

/// A lazy selection/transform pipeline bound to an [`EventStore`].
pub struct Frame<'a> {
    store: &'a EventStore,
    stages: Vec<Stage>,
}

impl<'a> Frame<'a> {
    /// Start an empty pipeline over a store.
    pub fn new(store: &'a EventStore) -> Self {
        Self { store, stages: Vec::new() }
    }

    /// Define a new per-candidate column from a closure.
    ///
    /// `inputs` names the columns whose values are passed to `func`, in
    /// order. The new name must not collide with a store column or an
    /// earlier define.
    pub fn define(
        mut self,
        name: &str,
        inputs: &[&str],
        func: impl Fn(&[f64]) -> f64 + 'static,
    ) -> Self {
        self.stages.push(Stage::DefineFn {
            name: name.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            func: Box::new(func),
        });
        self
    }

    /// Define a new per-candidate column from a compiled string expression.
    pub fn define_expr(mut self, name: &str, text: &str) -> Result<Self> {
        let expr = CompiledExpr::compile(text)?;
        self.stages.push(Stage::DefineExpr { name: name.to_string(), expr });
        Ok(self)
    }

    /// Keep only candidates for which `pred` returns true.
    pub fn filter(mut self, inputs: &[&str], pred: impl Fn(&[f64]) -> bool + 'static) -> Self {
        self.stages.push(Stage::FilterFn {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            pred: Box::new(pred),
        });
        self
    }

    /// Keep only candidates for which the expression evaluates above zero.
    pub fn filter_expr(mut self, text: &str) -> Result<Self> {
        let expr = CompiledExpr::compile(text)?;
        self.stages.push(Stage::FilterExpr { expr });
        Ok(self)
    }

    /// Fill a histogram of `column` over all surviving candidates.
    pub fn histo1d(&self, axis: Axis, column: &str) -> Result<Hist1D> {
        self.histo1d_with_policy(axis, FlowPolicy::Drop, column)
    }

    /// Fill a histogram with an explicit under/overflow policy.
    pub fn histo1d_with_policy(
        &self,
        axis: Axis,
        policy: FlowPolicy,
        column: &str,
    ) -> Result<Hist1D> {
        let plan = self.plan(column)?;
        let mut hist = Hist1D::with_policy(axis, policy)?;

        let base_names: Vec<&str> = plan.base.iter().map(|(name, _)| name.as_str()).collect();
        let mut env = vec![0.0f64; plan.n_slots];
        let mut scratch = vec![0.0f64; plan.max_inputs];

        for event in 0..self.store.n_events() {
            let slices = self.store.candidate_slices(event, &base_names)?;
            let n_candidates = slices.first().map(|s| s.len()).unwrap_or(0);
            'candidate: for i in 0..n_candidates {
                for (k, (_, slot)) in plan.base.iter().enumerate() {
                    env[*slot] = slices[k][i];
                }
                for step in &plan.steps {
                    match step {
                        Step::Define { slot, inputs, func } => {
                            gather(&env, inputs, &mut scratch);
                            env[*slot] = func(&scratch[..inputs.len()]);
                        }
                        Step::DefineExpr { slot, inputs, expr } => {
                            gather(&env, inputs, &mut scratch);
                            env[*slot] = expr.eval_row(&scratch[..inputs.len()]);
                        }
                        Step::Filter { inputs, pred } => {
                            gather(&env, inputs, &mut scratch);
                            if !pred(&scratch[..inputs.len()]) {
                                continue 'candidate;
                            }
                        }
                        Step::FilterExpr { inputs, expr } => {
                            gather(&env, inputs, &mut scratch);
                            if expr.eval_row(&scratch[..inputs.len()]) <= 0.0 {
                                continue 'candidate;
                            }
                        }
                    }
                }
                hist.fill(env[plan.target_slot]);
            }
        }

        Ok(hist)
    }

    fn plan(&self, target: &str) -> Result<Plan<'_>> {
        let mut slots: Vec<String> = Vec::new();
        let mut base: Vec<(String, usize)> = Vec::new();
        let mut steps: Vec<Step<'_>> = Vec::with_capacity(self.stages.len());
        let mut max_inputs = 0;

        for stage in &self.stages {
            match stage {
                Stage::DefineFn { name, inputs, func } => {
                    let input_slots = self.resolve_all(&mut slots, &mut base, inputs)?;
                    let slot = self.new_define_slot(&mut slots, name)?;
                    max_inputs = max_inputs.max(input_slots.len());
                    steps.push(Step::Define { slot, inputs: input_slots, func });
                }
                Stage::DefineExpr { name, expr } => {
                    let input_slots =
                        self.resolve_all(&mut slots, &mut base, &expr.required_columns)?;
                    let slot = self.new_define_slot(&mut slots, name)?;
                    max_inputs = max_inputs.max(input_slots.len());
                    steps.push(Step::DefineExpr { slot, inputs: input_slots, expr });
                }
                Stage::FilterFn { inputs, pred } => {
                    let input_slots = self.resolve_all(&mut slots, &mut base, inputs)?;
                    max_inputs = max_inputs.max(input_slots.len());
                    steps.push(Step::Filter { inputs: input_slots, pred });
                }
                Stage::FilterExpr { expr } => {
                    let input_slots =
                        self.resolve_all(&mut slots, &mut base, &expr.required_columns)?;
                    max_inputs = max_inputs.max(input_slots.len());
                    steps.push(Step::FilterExpr { inputs: input_slots, expr });
                }
            }
        }

        let target_slot = self.resolve(&mut slots, &mut base, target)?;
        Ok(Plan { base, steps, target_slot, n_slots: slots.len(), max_inputs })
    }

    /// Map a referenced name to its value slot, registering store columns
    /// as base inputs on first use.
    fn resolve(
        &self,
        slots: &mut Vec<String>,
        base: &mut Vec<(String, usize)>,
        name: &str,
    ) -> Result<usize> {
        if let Some(i) = slots.iter().position(|s| s == name) {
            return Ok(i);
        }
        if !self.store.contains(name) {
            return Err(Error::Column(format!("unknown column '{name}'")));
        }
        slots.push(name.to_string());
        base.push((name.to_string(), slots.len() - 1));
        Ok(slots.len() - 1)
    }

    fn resolve_all(
        &self,
        slots: &mut Vec<String>,
        base: &mut Vec<(String, usize)>,
        names: &[String],
    ) -> Result<Vec<usize>> {
        names.iter().map(|n| self.resolve(slots, base, n)).collect()
    }

    fn new_define_slot(&self, slots: &mut Vec<String>, name: &str) -> Result<usize> {
        if slots.iter().any(|s| s == name) || self.store.contains(name) {
            return Err(Error::Column(format!("column '{name}' already exists")));
        }
        slots.push(name.to_string());
        Ok(slots.len() - 1)
    }
}

struct Plan<'p> {
    /// Store columns read per candidate: (name, slot).
    base: Vec<(String, usize)>,
    steps: Vec<Step<'p>>,
    target_slot: usize,
    n_slots: usize,
    max_inputs: usize,
}

enum Step<'p> {
    Define { slot: usize, inputs: Vec<usize>, func: &'p RowFn },
    DefineExpr { slot: usize, inputs: Vec<usize>, expr: &'p CompiledExpr },
    Filter { inputs: Vec<usize>, pred: &'p RowPred },
    FilterExpr { inputs: Vec<usize>, expr: &'p CompiledExpr },
}

fn gather(env: &[f64], inputs: &[usize], scratch: &mut [f64]) {
    for (j, slot) in inputs.iter().enumerate() {
        scratch[j] = env[*slot];
    }
}
