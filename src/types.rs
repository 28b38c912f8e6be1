/// Event identifiers are a wrapping 16-bit counter, per the federation's
/// event-identifier wire field.
pub type EventId = u16;

// ObjectHandle

/// Runtime-assigned handle for a registered or discovered federation object.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ObjectHandle(u64);

impl ObjectHandle {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

// ObjectClassHandle

/// Runtime handle for an object class (e.g. Aircraft, Munition).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ObjectClassHandle(u64);

impl ObjectClassHandle {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

// AttributeHandle

/// Runtime handle for one attribute of an object class.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct AttributeHandle(u64);

impl AttributeHandle {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

// InteractionClassHandle

/// Runtime handle for an interaction class (e.g. WeaponFire).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct InteractionClassHandle(u64);

impl InteractionClassHandle {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

// ParameterHandle

/// Runtime handle for one parameter of an interaction class.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ParameterHandle(u64);

impl ParameterHandle {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

// NibId

/// Key into the canonical NIB table. Allocated by `NibMap`, never reused.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct NibId(u64);

impl NibId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

// PlayerId

/// Identity of a `SimulationObject` at the simulation boundary. The core
/// links NIBs to players through this key rather than through raw
/// back-pointers.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct PlayerId(u64);

impl PlayerId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}
