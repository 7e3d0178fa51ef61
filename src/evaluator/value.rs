use std::{collections::HashMap, fmt::Display, rc::Rc};

/// An operator method on an object. It receives the other operand and
/// returns `None` when it cannot handle it.
pub type Method = Rc<dyn Fn(&Value) -> Option<Value>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Int(i64),
    Float(f64),
    Str(String),
}

/// A user-level object: a type name and the operator methods it answers to,
/// keyed by method name (`add`, `radd`, `ceildiv`, ...).
#[derive(Clone)]
pub struct Object {
    pub type_name: String,
    methods: HashMap<String, Method>,
}

impl Object {
    pub fn new(type_name: &str) -> Self {
        Object {
            type_name: type_name.to_string(),
            methods: HashMap::new(),
        }
    }

    pub fn with_method(
        mut self,
        name: &str,
        method: impl Fn(&Value) -> Option<Value> + 'static,
    ) -> Self {
        self.methods.insert(name.to_string(), Rc::new(method));
        self
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Object")
            .field("type_name", &self.type_name)
            .field("methods", &self.method_names())
            .finish()
    }
}

// Methods are closures, so objects compare by their shape.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.method_names() == other.method_names()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Primitive(Primitive),
    Object(Object),
}

impl Value {
    pub fn int(value: i64) -> Self {
        Value::Primitive(Primitive::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Value::Primitive(Primitive::Float(value))
    }

    pub fn str(value: &str) -> Self {
        Value::Primitive(Primitive::Str(value.to_string()))
    }

    /// The type tag used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Value::Primitive(Primitive::Int(_)) => String::from("int"),
            Value::Primitive(Primitive::Float(_)) => String::from("float"),
            Value::Primitive(Primitive::Str(_)) => String::from("str"),
            Value::Object(object) => object.type_name.clone(),
        }
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Value::Primitive(primitive) => Some(primitive),
            Value::Object(_) => None,
        }
    }

    /// Calls the operator method `name` with `argument` as the other
    /// operand. Primitives only understand other primitives.
    pub fn call_method(&self, name: &str, argument: &Value) -> Option<Value> {
        match self {
            Value::Primitive(primitive) => {
                let other = argument.as_primitive()?;
                primitive.call_method(name, other).map(Value::Primitive)
            }
            Value::Object(object) => {
                let method = object.method(name)?;
                method(argument)
            }
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Primitive(Primitive::Int(value)) => write!(f, "{}", value),
            Value::Primitive(Primitive::Float(value)) => write!(f, "{:?}", value),
            Value::Primitive(Primitive::Str(value)) => write!(f, "{:?}", value),
            Value::Object(object) => write!(f, "<{} object>", object.type_name),
        }
    }
}

type NativeOperation = fn(&Primitive, &Primitive) -> Option<Primitive>;

fn native_operation(name: &str) -> Option<(NativeOperation, bool)> {
    let operation: (NativeOperation, bool) = match name {
        "add" => (add, false),
        "radd" => (add, true),
        "sub" => (sub, false),
        "rsub" => (sub, true),
        "mul" => (mul, false),
        "rmul" => (mul, true),
        "truediv" => (true_div, false),
        "rtruediv" => (true_div, true),
        "floordiv" => (floor_div, false),
        "rfloordiv" => (floor_div, true),
        "mod" => (modulo, false),
        "rmod" => (modulo, true),
        _ => return None,
    };
    Some(operation)
}

impl Primitive {
    /// Native arithmetic. A reflected method (`radd`, ...) computes with
    /// `self` as the right-hand operand.
    pub fn call_method(&self, name: &str, other: &Primitive) -> Option<Primitive> {
        let (operation, reflected) = native_operation(name)?;
        if reflected {
            operation(other, self)
        } else {
            operation(self, other)
        }
    }

    pub fn negate(&self) -> Option<Primitive> {
        match self {
            Primitive::Int(value) => value.checked_neg().map(Primitive::Int),
            Primitive::Float(value) => Some(Primitive::Float(-value)),
            Primitive::Str(_) => None,
        }
    }

    pub fn floor_div(&self, other: &Primitive) -> Option<Primitive> {
        floor_div(self, other)
    }
}

enum Numbers {
    Ints(i64, i64),
    Floats(f64, f64),
}

fn numbers(left: &Primitive, right: &Primitive) -> Option<Numbers> {
    match (left, right) {
        (Primitive::Int(l), Primitive::Int(r)) => Some(Numbers::Ints(*l, *r)),
        (Primitive::Int(l), Primitive::Float(r)) => Some(Numbers::Floats(*l as f64, *r)),
        (Primitive::Float(l), Primitive::Int(r)) => Some(Numbers::Floats(*l, *r as f64)),
        (Primitive::Float(l), Primitive::Float(r)) => Some(Numbers::Floats(*l, *r)),
        _ => None,
    }
}

fn add(left: &Primitive, right: &Primitive) -> Option<Primitive> {
    if let (Primitive::Str(l), Primitive::Str(r)) = (left, right) {
        return Some(Primitive::Str(format!("{}{}", l, r)));
    }

    match numbers(left, right)? {
        Numbers::Ints(l, r) => l.checked_add(r).map(Primitive::Int),
        Numbers::Floats(l, r) => Some(Primitive::Float(l + r)),
    }
}

fn sub(left: &Primitive, right: &Primitive) -> Option<Primitive> {
    match numbers(left, right)? {
        Numbers::Ints(l, r) => l.checked_sub(r).map(Primitive::Int),
        Numbers::Floats(l, r) => Some(Primitive::Float(l - r)),
    }
}

/// Longest string a repetition may build.
const MAX_STRING_BYTES: usize = 1 << 30;

fn repeat(string: &str, count: i64) -> Option<Primitive> {
    // Negative counts give the empty string.
    let count = usize::try_from(count).unwrap_or(0);
    let length = string.len().checked_mul(count)?;
    if length > MAX_STRING_BYTES {
        return None;
    }
    Some(Primitive::Str(string.repeat(count)))
}

fn mul(left: &Primitive, right: &Primitive) -> Option<Primitive> {
    match (left, right) {
        (Primitive::Str(string), Primitive::Int(count))
        | (Primitive::Int(count), Primitive::Str(string)) => return repeat(string, *count),
        _ => {}
    }

    match numbers(left, right)? {
        Numbers::Ints(l, r) => l.checked_mul(r).map(Primitive::Int),
        Numbers::Floats(l, r) => Some(Primitive::Float(l * r)),
    }
}

fn true_div(left: &Primitive, right: &Primitive) -> Option<Primitive> {
    let (l, r) = match numbers(left, right)? {
        Numbers::Ints(_, 0) => return None,
        // An exact quotient is rounded once, by the cast. Inexact quotients of
        // ints above 2^53 may be off by one ulp.
        Numbers::Ints(l, r) => match (l.checked_rem(r), l.checked_div(r)) {
            (Some(0), Some(quotient)) => return Some(Primitive::Float(quotient as f64)),
            _ => (l as f64, r as f64),
        },
        Numbers::Floats(l, r) => (l, r),
    };

    if r == 0.0 {
        return None;
    }
    Some(Primitive::Float(l / r))
}

/// Rounds towards negative infinity.
fn floor_div(left: &Primitive, right: &Primitive) -> Option<Primitive> {
    match numbers(left, right)? {
        Numbers::Ints(l, r) => {
            let quotient = l.checked_div(r)?;
            if l % r != 0 && ((l < 0) != (r < 0)) {
                Some(Primitive::Int(quotient - 1))
            } else {
                Some(Primitive::Int(quotient))
            }
        }
        Numbers::Floats(l, r) => {
            if r == 0.0 {
                return None;
            }
            Some(Primitive::Float((l / r).floor()))
        }
    }
}

/// The remainder takes the sign of the divisor.
fn modulo(left: &Primitive, right: &Primitive) -> Option<Primitive> {
    match numbers(left, right)? {
        Numbers::Ints(l, r) => {
            let remainder = l.checked_rem(r)?;
            if remainder != 0 && ((remainder < 0) != (r < 0)) {
                Some(Primitive::Int(remainder + r))
            } else {
                Some(Primitive::Int(remainder))
            }
        }
        Numbers::Floats(l, r) => {
            if r == 0.0 {
                return None;
            }
            let remainder = l % r;
            if remainder != 0.0 && ((remainder < 0.0) != (r < 0.0)) {
                Some(Primitive::Float(remainder + r))
            } else {
                Some(Primitive::Float(remainder))
            }
        }
    }
}
