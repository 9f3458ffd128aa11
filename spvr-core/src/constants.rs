//! Fixed parameters of the regression harness.
//!
//! The admin key pair below is the well-known default admin key shipped with
//! spv-wallet test deployments. Both values can be overridden through the
//! `ADMIN_XPRIV` / `ADMIN_XPUB` environment variables.

pub const DEFAULT_ADMIN_XPRIV: &str = "xprv9s21ZrQH143K3CbJXirfrtpLvhT3Vgusdo8coBritQ3rcS7Jy7sxWhatuxG5h2y1Cqj8FKmPp69536gmjYRpfga2MJdsGyBsnB12E19CESK";
pub const DEFAULT_ADMIN_XPUB: &str = "xpub661MyMwAqRbcFgfmdkPgE2m5UjHXu9dj124DbaGLSjaqVESTWfCD4VuNmEbVPkbYLCkykwVZvmA8Pbf8884TQr1FgdG2nPoHR8aB36YdDQh";

/// Paymail alias registered for each leader account.
pub const LEADER_PAYMAIL_ALIAS: &str = "leader";

/// Amount transferred from the master instance to each leader.
pub const SEED_SATOSHIS: u64 = 10;

/// A freshly funded leader must hold at least this much.
pub const MIN_LEADER_BALANCE: u64 = 9;

/// The master instance must hold at least this much for a balance check to pass.
pub const MIN_MASTER_BALANCE: u64 = 20;

/// Header carrying the xpub the request is authenticated as.
pub const AUTH_HEADER: &str = "x-auth-key";

/// Metadata description attached to every transfer issued by the harness.
pub const TRANSFER_DESCRIPTION: &str = "regression-test";
