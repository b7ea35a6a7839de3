use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul};
use std::collections::BTreeMap;
use std::io;

use algebra::matrix_sparse::MatrixSparse;
use algebra::ring::Ring;

use crate::ccs::CustomizableConstraintSystem;
use crate::r1cs::R1cs;

/// The kind of a circuit variable; the ordering fixes the column layout
/// of the emitted matrices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum VariableKind {
    Uninitialized,
    Constant,
    Input,
    Auxiliary,
}

/// A tagged circuit variable. The type parameter ties a variable to the
/// ring its circuit is built over.
pub struct Variable<E> {
    pub kind: VariableKind,
    pub number: usize,
    _ring: PhantomData<E>,
}

impl<E> Variable<E> {
    pub const fn new(kind: VariableKind, number: usize) -> Self {
        Self {
            kind,
            number,
            _ring: PhantomData,
        }
    }

    pub const fn constant() -> Self {
        Self::new(VariableKind::Constant, 0)
    }
}

impl<E> Clone for Variable<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Variable<E> {}

impl<E> PartialEq for Variable<E> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.number == other.number
    }
}

impl<E> Eq for Variable<E> {}

impl<E> PartialOrd for Variable<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Variable<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.kind, self.number).cmp(&(other.kind, other.number))
    }
}

impl<E> fmt::Debug for Variable<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.number)
    }
}

/// A mapping from variables to coefficients; terms with the same variable
/// merge by summing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LinearCombination<E: Ring> {
    pub terms: BTreeMap<Variable<E>, E>,
}

impl<E: Ring> LinearCombination<E> {
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    pub fn add_term(&mut self, variable: Variable<E>, coefficient: E) {
        self.terms
            .entry(variable)
            .and_modify(|c| *c += coefficient)
            .or_insert(coefficient);
    }

    pub fn add_constant(&mut self, coefficient: E) {
        self.add_term(Variable::constant(), coefficient);
    }

    pub fn add_variable(&mut self, variable: Variable<E>) {
        self.add_term(variable, E::one());
    }

    pub fn add_combination(&mut self, other: &Self) {
        for (variable, coefficient) in &other.terms {
            self.add_term(*variable, *coefficient);
        }
    }

    pub fn scale(&mut self, scalar: &E) {
        for coefficient in self.terms.values_mut() {
            *coefficient *= *scalar;
        }
    }
}

impl<E: Ring> Default for LinearCombination<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// One lowered constraint: `D` combination slots whose product must equal
/// the linear side.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Constraint<E: Ring> {
    pub r: Vec<LinearCombination<E>>,
    pub l: LinearCombination<E>,
}

/// An arithmetic expression over circuit variables. The degree is a
/// function of the shape alone; lowering rejects expressions that do not
/// fit the builder's degree bound.
#[derive(Clone, Debug)]
pub enum Expression<E: Ring> {
    Constant(E),
    Variable(Variable<E>),
    Add(Box<Expression<E>>, Box<Expression<E>>),
    Mul(Box<Expression<E>>, Box<Expression<E>>),
}

impl<E: Ring> Expression<E> {
    pub fn constant(value: E) -> Self {
        Self::Constant(value)
    }

    pub fn degree(&self) -> usize {
        match self {
            Self::Constant(_) => 0,
            Self::Variable(_) => 1,
            Self::Add(l, r) => l.degree().max(r.degree()),
            Self::Mul(l, r) => l.degree() + r.degree(),
        }
    }

    fn lower_linear(&self, lc: &mut LinearCombination<E>) {
        match self {
            Self::Constant(value) => lc.add_constant(*value),
            Self::Variable(variable) => lc.add_variable(*variable),
            Self::Add(l, r) => {
                assert!(
                    l.degree() <= 1 && r.degree() <= 1,
                    "can't add non-linear expressions"
                );
                l.lower_linear(lc);
                r.lower_linear(lc);
            }
            Self::Mul(l, r) => match (l.as_ref(), r.as_ref()) {
                (Self::Constant(value), other) | (other, Self::Constant(value)) => {
                    assert!(other.degree() <= 1, "can't multiply non-linear expressions");
                    let mut t = LinearCombination::new();
                    other.lower_linear(&mut t);
                    t.scale(value);
                    lc.add_combination(&t);
                }
                _ => panic!("can't multiply non-constant expressions"),
            },
        }
    }

    fn lower_combination(&self, slots: &mut [LinearCombination<E>]) {
        assert!(
            self.degree() <= slots.len(),
            "high-degree constraints are not supported"
        );
        match self {
            Self::Constant(_) => panic!("constant is not a combination"),
            Self::Variable(variable) => {
                slots[0].add_variable(*variable);
                fill_ones(slots, 1);
            }
            Self::Add(..) => {
                self.lower_linear(&mut slots[0]);
                fill_ones(slots, 1);
            }
            Self::Mul(l, r) => {
                if matches!(l.as_ref(), Self::Constant(_)) || matches!(r.as_ref(), Self::Constant(_))
                {
                    self.lower_linear(&mut slots[0]);
                    fill_ones(slots, 1);
                    return;
                }
                match (l.as_ref(), r.as_ref()) {
                    (Self::Variable(a), Self::Variable(b)) => {
                        slots[0].add_variable(*a);
                        slots[1].add_variable(*b);
                        fill_ones(slots, 2);
                    }
                    (Self::Variable(a), other) => {
                        let degree = other.degree();
                        slots[0].add_variable(*a);
                        other.lower_combination(&mut slots[1..1 + degree]);
                        fill_ones(slots, 1 + degree);
                    }
                    (other, Self::Variable(b)) => {
                        let degree = other.degree();
                        other.lower_combination(&mut slots[..degree]);
                        slots[degree].add_variable(*b);
                        fill_ones(slots, degree + 1);
                    }
                    (left, right) => {
                        let left_degree = left.degree();
                        let right_degree = right.degree();
                        left.lower_combination(&mut slots[..left_degree]);
                        right.lower_combination(&mut slots[left_degree..left_degree + right_degree]);
                        fill_ones(slots, left_degree + right_degree);
                    }
                }
            }
        }
    }
}

fn fill_ones<E: Ring>(slots: &mut [LinearCombination<E>], from: usize) {
    for slot in &mut slots[from..] {
        slot.add_constant(E::one());
    }
}

impl<E: Ring> From<Variable<E>> for Expression<E> {
    fn from(variable: Variable<E>) -> Self {
        Self::Variable(variable)
    }
}

impl<E: Ring> From<E> for Expression<E> {
    fn from(value: E) -> Self {
        Self::Constant(value)
    }
}

impl<E: Ring> Add for Expression<E> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::Add(Box::new(self), Box::new(other))
    }
}

impl<E: Ring> Add<Variable<E>> for Expression<E> {
    type Output = Self;

    fn add(self, other: Variable<E>) -> Self {
        self + Self::from(other)
    }
}

impl<E: Ring> Add<E> for Expression<E> {
    type Output = Self;

    fn add(self, other: E) -> Self {
        self + Self::Constant(other)
    }
}

impl<E: Ring> Add for Variable<E> {
    type Output = Expression<E>;

    fn add(self, other: Self) -> Expression<E> {
        Expression::from(self) + Expression::from(other)
    }
}

impl<E: Ring> Add<Expression<E>> for Variable<E> {
    type Output = Expression<E>;

    fn add(self, other: Expression<E>) -> Expression<E> {
        Expression::from(self) + other
    }
}

impl<E: Ring> Add<E> for Variable<E> {
    type Output = Expression<E>;

    fn add(self, other: E) -> Expression<E> {
        Expression::from(self) + Expression::Constant(other)
    }
}

impl<E: Ring> Mul for Expression<E> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::Mul(Box::new(self), Box::new(other))
    }
}

impl<E: Ring> Mul<Variable<E>> for Expression<E> {
    type Output = Self;

    fn mul(self, other: Variable<E>) -> Self {
        self * Self::from(other)
    }
}

impl<E: Ring> Mul<E> for Expression<E> {
    type Output = Self;

    fn mul(self, other: E) -> Self {
        self * Self::Constant(other)
    }
}

impl<E: Ring> Mul for Variable<E> {
    type Output = Expression<E>;

    fn mul(self, other: Self) -> Expression<E> {
        Expression::from(self) * Expression::from(other)
    }
}

impl<E: Ring> Mul<Expression<E>> for Variable<E> {
    type Output = Expression<E>;

    fn mul(self, other: Expression<E>) -> Expression<E> {
        Expression::from(self) * other
    }
}

impl<E: Ring> Mul<E> for Variable<E> {
    type Output = Expression<E>;

    fn mul(self, other: E) -> Expression<E> {
        Expression::from(self) * Expression::Constant(other)
    }
}

/// One node of the profiling-scope tree.
#[derive(Clone, Debug)]
pub struct ScopeInfo {
    pub name: &'static str,
    pub constraints: usize,
    pub variables: usize,
    pub children: Vec<ScopeInfo>,
}

impl ScopeInfo {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            constraints: 0,
            variables: 0,
            children: Vec::new(),
        }
    }

    fn print<W: io::Write>(&self, out: &mut W, level: usize) -> io::Result<()> {
        for _ in 0..level {
            write!(out, " ")?;
        }
        writeln!(out, "- {} {}x{}", self.name, self.constraints, self.variables)?;
        for child in &self.children {
            child.print(out, level + 1)?;
        }
        Ok(())
    }
}

/// Compiles an arithmetic-expression circuit into an R1CS (for degree at
/// most 2) or a CCS of degree `D`.
pub struct CircuitBuilder<E: Ring, const D: usize> {
    inputs: usize,
    auxiliaries: usize,
    constraints: Vec<Constraint<E>>,
    scopes: Vec<ScopeInfo>,
    scope_path: Vec<usize>,
}

impl<E: Ring, const D: usize> CircuitBuilder<E, D> {
    pub fn new() -> Self {
        Self {
            inputs: 0,
            auxiliaries: 0,
            constraints: Vec::new(),
            scopes: Vec::new(),
            scope_path: Vec::new(),
        }
    }

    pub const fn degree() -> usize {
        D
    }

    #[must_use = "circuit variable should be constrained"]
    pub fn input(&mut self) -> Variable<E> {
        self.count_variable();
        self.inputs += 1;
        Variable::new(VariableKind::Input, self.inputs)
    }

    #[must_use = "circuit variable should be constrained"]
    pub fn auxiliary(&mut self) -> Variable<E> {
        self.count_variable();
        self.auxiliaries += 1;
        Variable::new(VariableKind::Auxiliary, self.auxiliaries)
    }

    #[must_use = "circuit variable should be constrained"]
    pub fn variable(&mut self, kind: VariableKind) -> Variable<E> {
        match kind {
            VariableKind::Constant => panic!("new constant variable requested"),
            VariableKind::Uninitialized => panic!("new uninitialized variable requested"),
            VariableKind::Input => self.input(),
            VariableKind::Auxiliary => self.auxiliary(),
        }
    }

    /// Adds the constraint `lhs == rhs`.
    pub fn constrain(&mut self, lhs: impl Into<Expression<E>>, rhs: impl Into<Expression<E>>) {
        let lhs = lhs.into();
        let rhs = rhs.into();
        self.count_constraint();
        let constraint = Self::lower(&lhs, &rhs);
        self.constraints.push(constraint);
    }

    pub fn variables(&self) -> usize {
        1 + self.inputs + self.auxiliaries
    }

    pub fn constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Opens a nested profiling scope; scopes count their direct
    /// constraints and variables.
    pub fn enter_scope(&mut self, name: &'static str) {
        if self.scope_path.is_empty() {
            self.scopes.push(ScopeInfo::new(name));
            self.scope_path.push(self.scopes.len() - 1);
        } else {
            let scope = self.current_scope().expect("non-empty scope path");
            scope.children.push(ScopeInfo::new(name));
            let index = scope.children.len() - 1;
            self.scope_path.push(index);
        }
    }

    pub fn exit_scope(&mut self) {
        self.scope_path.pop().expect("no scope to exit");
    }

    pub fn scoped<T>(&mut self, name: &'static str, body: impl FnOnce(&mut Self) -> T) -> T {
        self.enter_scope(name);
        let result = body(self);
        self.exit_scope();
        result
    }

    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Circuit {}x{}", self.constraints.len(), self.variables())?;
        for scope in &self.scopes {
            scope.print(out, 0)?;
        }
        Ok(())
    }

    pub fn r1cs(&self) -> R1cs<E> {
        assert!(D <= 2, "high-degree circuits are not supported");
        let mut a = MatrixSparse::empty(self.constraints.len(), self.variables());
        let mut b = MatrixSparse::empty(self.constraints.len(), self.variables());
        let mut c = MatrixSparse::empty(self.constraints.len(), self.variables());
        for constraint in &self.constraints {
            self.put(&mut a, &constraint.r[0]);
            self.put(&mut b, &constraint.r[1]);
            self.put(&mut c, &constraint.l);
        }
        R1cs::new(a, b, c)
    }

    pub fn ccs(&self) -> CustomizableConstraintSystem<E> {
        let mut ms: Vec<MatrixSparse<E>> = (0..=D)
            .map(|_| MatrixSparse::empty(self.constraints.len(), self.variables()))
            .collect();
        for constraint in &self.constraints {
            for (m, combination) in ms.iter_mut().zip(&constraint.r) {
                self.put(m, combination);
            }
            self.put(ms.last_mut().expect("D + 1 matrices"), &constraint.l);
        }
        let s = vec![(0..D).collect(), vec![D]];
        CustomizableConstraintSystem::new(
            self.constraints.len(),
            self.variables(),
            ms,
            s,
            vec![E::one(), E::from_int(-1)],
        )
    }

    fn lower(lhs: &Expression<E>, rhs: &Expression<E>) -> Constraint<E> {
        assert!(
            lhs.degree().max(rhs.degree()) <= D,
            "high-degree constraints are not supported"
        );
        let mut constraint = Constraint {
            r: vec![LinearCombination::new(); D],
            l: LinearCombination::new(),
        };
        match (lhs, rhs) {
            (Expression::Constant(_), Expression::Constant(_)) => {
                panic!("constant equation")
            }
            (Expression::Constant(value), Expression::Variable(variable)) => {
                constraint.r[0].add_constant(*value);
                constraint.r[0].add_term(*variable, E::from_int(-1));
                fill_ones(&mut constraint.r, 1);
            }
            (Expression::Constant(value), rhs) => {
                constraint.l.add_constant(*value);
                rhs.lower_combination(&mut constraint.r);
            }
            (Expression::Variable(variable), Expression::Constant(value)) => {
                constraint.r[0].add_term(*variable, E::from_int(-1));
                constraint.r[0].add_constant(*value);
                fill_ones(&mut constraint.r, 1);
            }
            (Expression::Variable(lhs), Expression::Variable(rhs)) => {
                constraint.r[0].add_variable(*lhs);
                constraint.r[0].add_term(*rhs, E::from_int(-1));
                fill_ones(&mut constraint.r, 1);
            }
            (Expression::Variable(variable), rhs) => {
                constraint.l.add_variable(*variable);
                rhs.lower_combination(&mut constraint.r);
            }
            (lhs, rhs) if lhs.degree() <= 1 => {
                lhs.lower_linear(&mut constraint.l);
                rhs.lower_combination(&mut constraint.r);
            }
            _ => panic!("high-degree left side of an equation"),
        }
        constraint
    }

    fn put(&self, m: &mut MatrixSparse<E>, lc: &LinearCombination<E>) {
        for (variable, coefficient) in &lc.terms {
            let column = match variable.kind {
                VariableKind::Constant => 0,
                VariableKind::Input => variable.number,
                VariableKind::Auxiliary => self.inputs + variable.number,
                VariableKind::Uninitialized => panic!("uninitialized variable in circuit"),
            };
            m.c_index.push(column);
            m.elements.push(*coefficient);
        }
        m.r_index.push(m.elements.len());
    }

    fn count_variable(&mut self) {
        if let Some(scope) = self.current_scope() {
            scope.variables += 1;
        }
    }

    fn count_constraint(&mut self) {
        if let Some(scope) = self.current_scope() {
            scope.constraints += 1;
        }
    }

    fn current_scope(&mut self) -> Option<&mut ScopeInfo> {
        let mut path = self.scope_path.iter();
        let first = *path.next()?;
        let mut scope = &mut self.scopes[first];
        for index in path {
            scope = &mut scope.children[*index];
        }
        Some(scope)
    }
}

impl<E: Ring, const D: usize> Default for CircuitBuilder<E, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra::matrix_dense::MatrixDense;
    use algebra::pervushin::PervushinRing as E;
    use algebra::vector_dense::VectorDense;

    fn sparse(rows: usize, columns: usize, values: &[i64]) -> MatrixSparse<E> {
        MatrixSparse::from(&MatrixDense::<E>::from_ints(rows, columns, values))
    }

    fn witness(values: &[i64]) -> VectorDense<E> {
        VectorDense::new(values.iter().map(|n| E::from_int(*n)).collect())
    }

    #[test]
    fn equalities() {
        let expected = R1cs::new(
            sparse(
                4,
                4,
                &[
                    0, 1, 0, -1, //
                    0, 0, -1, 1, //
                    4, 0, 0, -1, //
                    4, 0, 0, -1, //
                ],
            ),
            sparse(
                4,
                4,
                &[
                    1, 0, 0, 0, //
                    1, 0, 0, 0, //
                    1, 0, 0, 0, //
                    1, 0, 0, 0, //
                ],
            ),
            sparse(4, 4, &[0; 16]),
        );

        let mut circuit = CircuitBuilder::<E, 2>::new();
        let c = E::from_int(4);
        let x = circuit.input();
        let y = circuit.input();
        let w = circuit.auxiliary();

        circuit.constrain(x, w);
        circuit.constrain(w, y);
        circuit.constrain(w, c);
        circuit.constrain(c, w);

        assert_eq!(expected, circuit.r1cs());

        let z = witness(&[1, 4, 4, 4]);
        assert!(circuit.r1cs().is_satisfied(&z));
    }

    #[test]
    fn additions() {
        let expected = R1cs::new(
            sparse(
                5,
                4,
                &[
                    0, 0, 0, 2, //
                    0, 0, 2, 0, //
                    0, 0, 2, 0, //
                    4, 0, 0, 1, //
                    4, 0, 0, 1, //
                ],
            ),
            sparse(
                5,
                4,
                &[
                    1, 0, 0, 0, //
                    1, 0, 0, 0, //
                    1, 0, 0, 0, //
                    1, 0, 0, 0, //
                    1, 0, 0, 0, //
                ],
            ),
            sparse(
                5,
                4,
                &[
                    0, 1, 0, 0, //
                    0, 0, 0, 1, //
                    4, 0, 0, 0, //
                    0, 1, 0, 0, //
                    0, 1, 0, 0, //
                ],
            ),
        );

        let mut circuit = CircuitBuilder::<E, 2>::new();
        let c = E::from_int(4);
        let x = circuit.input();
        let y = circuit.input();
        let w = circuit.auxiliary();

        circuit.constrain(x, w + w);
        circuit.constrain(w, y + y);
        circuit.constrain(c, y + y);
        circuit.constrain(x, w + c);
        circuit.constrain(x, Expression::constant(c) + w);

        assert_eq!(expected, circuit.r1cs());

        let z = witness(&[1, 8, 2, 4]);
        assert!(circuit.r1cs().is_satisfied(&z));
    }

    #[test]
    fn multiplications() {
        let expected = R1cs::new(
            sparse(
                5,
                4,
                &[
                    0, 0, 0, 1, //
                    0, 0, 1, 0, //
                    0, 0, 1, 0, //
                    0, 0, 0, 4, //
                    0, 0, 0, 4, //
                ],
            ),
            sparse(
                5,
                4,
                &[
                    0, 0, 0, 1, //
                    0, 0, 1, 0, //
                    0, 0, 1, 0, //
                    1, 0, 0, 0, //
                    1, 0, 0, 0, //
                ],
            ),
            sparse(
                5,
                4,
                &[
                    0, 1, 0, 0, //
                    0, 0, 0, 1, //
                    4, 0, 0, 0, //
                    0, 1, 0, 0, //
                    0, 1, 0, 0, //
                ],
            ),
        );

        let mut circuit = CircuitBuilder::<E, 2>::new();
        let c = E::from_int(4);
        let x = circuit.input();
        let y = circuit.input();
        let w = circuit.auxiliary();

        circuit.constrain(x, w * w);
        circuit.constrain(w, y * y);
        circuit.constrain(c, y * y);
        circuit.constrain(x, w * c);
        circuit.constrain(x, Expression::constant(c) * w);

        assert_eq!(expected, circuit.r1cs());

        let z = witness(&[1, 16, 2, 4]);
        assert!(circuit.r1cs().is_satisfied(&z));
    }

    #[test]
    fn boards() {
        let expected = R1cs::new(
            sparse(
                8,
                5,
                &[
                    0, 1, 1, 0, 0, //
                    0, 0, 0, 1, 0, //
                    4, 1, 1, 1, 0, //
                    8, 0, 1, 1, 0, //
                    0, 0, 2, 2, 0, //
                    0, 6, 0, 0, 0, //
                    8, 2, 0, 0, 0, //
                    8, 2, 0, 0, 0, //
                ],
            ),
            sparse(
                8,
                5,
                &[
                    0, 0, 0, 1, 1, //
                    0, 0, 0, 1, 0, //
                    1, 0, 0, 0, 0, //
                    1, 0, 0, 0, 0, //
                    1, 0, 0, 0, 0, //
                    1, 0, 0, 0, 0, //
                    1, 0, 0, 0, 0, //
                    1, 0, 0, 0, 0, //
                ],
            ),
            sparse(
                8,
                5,
                &[
                    160, 0, 0, 0, 0, //
                    0, 4, 0, 0, 0, //
                    0, 0, 0, 0, 1, //
                    0, 0, 0, 0, 1, //
                    0, 0, 0, 0, 1, //
                    24, 0, 0, 0, 0, //
                    0, 0, 0, 0, 1, //
                    0, 0, 0, 0, 1, //
                ],
            ),
        );

        let mut circuit = CircuitBuilder::<E, 2>::new();
        let a = E::from_int(160);
        let b = E::from_int(2);
        let c = E::from_int(4);
        let d = E::from_int(24);
        let x = circuit.input();
        let y = circuit.input();
        let z = circuit.input();
        let w = circuit.auxiliary();

        circuit.constrain(a, (x + y) * (z + w));
        circuit.constrain(x * c, z * z);
        circuit.constrain(w, x + y + z + c);
        circuit.constrain(w, Expression::constant(c) + y + z + c);
        circuit.constrain(w, y * b + z * b);
        circuit.constrain(d, x * b + x * c);
        circuit.constrain(w, Expression::constant(c) + (x + b) * b);
        circuit.constrain(w, (x + c) * b);

        assert_eq!(expected, circuit.r1cs());

        let zv = witness(&[1, 4, 4, 4, 16]);
        assert!(circuit.r1cs().is_satisfied(&zv));
    }

    #[test]
    fn cubism() {
        let am = sparse(2, 5, &[0, 1, 0, 0, 0, 0, 1, 1, 0, 0]);
        let bm = sparse(2, 5, &[0, 1, 0, 0, 0, 0, 1, 0, 1, 0]);
        let cm = sparse(2, 5, &[0, 1, 0, 0, 0, 0, 1, 0, 0, 1]);
        let dm = sparse(2, 5, &[0, 0, 0, 0, 1, 350, 0, 0, 0, 0]);
        let expected = CustomizableConstraintSystem::new(
            2,
            5,
            vec![am, bm, cm, dm],
            vec![vec![0, 1, 2], vec![3]],
            vec![E::one(), E::from_int(-1)],
        );

        let mut circuit = CircuitBuilder::<E, 3>::new();
        let c = E::from_int(350);
        let x = circuit.input();
        let y = circuit.input();
        let z = circuit.input();
        let w = circuit.auxiliary();

        circuit.constrain(w, x * x * x);
        circuit.constrain(c, (x + y) * (x + z) * (x + w));

        assert_eq!(expected, circuit.ccs());

        let zv = witness(&[1, 2, 3, 5, 8]);
        assert!(circuit.ccs().is_satisfied(&zv));
    }

    #[test]
    fn witness_perturbation_is_rejected() {
        let mut circuit = CircuitBuilder::<E, 2>::new();
        let x = circuit.input();
        let y = circuit.input();
        let w = circuit.auxiliary();
        circuit.constrain(w, x * y);
        circuit.constrain(x, w + y);
        let r1cs = circuit.r1cs();

        let mut z = witness(&[1, -2, 2, -4]);
        assert!(r1cs.is_satisfied(&z));
        for i in 1..z.size() {
            z[i] += E::one();
            assert!(!r1cs.is_satisfied(&z));
            z[i] -= E::one();
        }
    }

    #[test]
    fn scopes_nest_and_count() {
        let mut circuit = CircuitBuilder::<E, 2>::new();
        let (x, y) = circuit.scoped("outer", |circuit| {
            let x = circuit.input();
            let y = circuit.auxiliary();
            circuit.constrain(x, y);
            let inner = circuit.scoped("inner", |circuit| {
                let w = circuit.auxiliary();
                circuit.constrain(w, Expression::from(x) + y);
                circuit.constrain(w, Expression::from(x) + y);
                w
            });
            let _ = inner;
            (x, y)
        });
        let _ = (x, y);

        assert_eq!(circuit.scopes.len(), 1);
        let outer = &circuit.scopes[0];
        assert_eq!(outer.name, "outer");
        assert_eq!(outer.constraints, 1);
        assert_eq!(outer.variables, 2);
        assert_eq!(outer.children.len(), 1);
        let inner = &outer.children[0];
        assert_eq!(inner.constraints, 2);
        assert_eq!(inner.variables, 1);

        let mut printed = Vec::new();
        circuit.print(&mut printed).expect("write to a vector");
        let printed = String::from_utf8(printed).expect("ascii");
        assert!(printed.starts_with("Circuit 3x4"));
        assert!(printed.contains("- outer 1x2"));
        assert!(printed.contains(" - inner 2x1"));
    }

    #[test]
    #[should_panic(expected = "high-degree")]
    fn cubic_does_not_fit_an_r1cs_builder() {
        let mut circuit = CircuitBuilder::<E, 2>::new();
        let x = circuit.input();
        let w = circuit.auxiliary();
        circuit.constrain(w, x * x * x);
    }

    #[test]
    #[should_panic(expected = "constant variable")]
    fn constant_variables_cannot_be_requested() {
        let mut circuit = CircuitBuilder::<E, 2>::new();
        let _ = circuit.variable(VariableKind::Constant);
    }
}
