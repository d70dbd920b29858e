mod failure_injection;
mod topologies;
