// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
pub mod hsl;
