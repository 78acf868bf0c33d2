//! Canonical column names.
//!
//! Canonical names are trimmed and lower-case. Input columns are matched
//! against them after canonicalization; output and export use them verbatim.

/// Employee code column.
pub const EMPLOYEE_CODE: &str = "codigo_funcionario";
/// Employee display name column.
pub const EMPLOYEE_NAME: &str = "nome_funcionario";
/// Organizational section column.
pub const SECTION: &str = "secao";
/// Job function column.
pub const FUNCTION: &str = "funcao";
/// Base salary column.
pub const SALARY: &str = "valor_salario";
/// Meal allowance column.
pub const MEAL_ALLOWANCE: &str = "vale_alimentacao";
/// Insurance benefit column.
pub const INSURANCE: &str = "seguro";

/// Social charges output column.
pub const SOCIAL_CHARGES: &str = "valor_encargos";
/// 13th-salary provision output column.
pub const THIRTEENTH_SALARY: &str = "provisao_13_salario";
/// Vacation provision output column.
pub const VACATION: &str = "provisao_ferias";
/// Severance indemnity provision output column.
pub const SEVERANCE_INDEMNITY: &str = "provisao_indenizacao_5pc";
/// Monthly total cost output column.
pub const MONTHLY_TOTAL: &str = "custo_total_mensal";

/// Columns every uploaded table must provide, in declared order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    EMPLOYEE_CODE,
    EMPLOYEE_NAME,
    SECTION,
    FUNCTION,
    SALARY,
    MEAL_ALLOWANCE,
    INSURANCE,
];

/// Columns produced by the calculator, in output order.
pub const COMPUTED_COLUMNS: [&str; 5] = [
    SOCIAL_CHARGES,
    THIRTEENTH_SALARY,
    VACATION,
    SEVERANCE_INDEMNITY,
    MONTHLY_TOTAL,
];

/// Returns true if `name` is one of the calculator's output columns.
pub fn is_computed(name: &str) -> bool {
    COMPUTED_COLUMNS.contains(&name)
}
