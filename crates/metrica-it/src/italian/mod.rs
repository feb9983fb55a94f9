// Italian language data shared across the engine modules.

pub mod constants;
