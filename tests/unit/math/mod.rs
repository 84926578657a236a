mod binomial;
mod validation;
