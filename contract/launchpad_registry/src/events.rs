use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct DeployedEvent {
    pub owner: Address,
    pub token: Address,
    pub campaign: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct RegisteredEvent {
    pub id: u32,
    pub owner: Address,
    pub campaign: Address,
    pub fee: i128,
}

pub fn emit_deployed(env: &Env, event: DeployedEvent) {
    env.events()
        .publish((Symbol::new(env, "deployed"), event.token.clone()), event);
}

pub fn emit_registered(env: &Env, token: Address, event: RegisteredEvent) {
    env.events().publish((Symbol::new(env, "registered"), token), event);
}
