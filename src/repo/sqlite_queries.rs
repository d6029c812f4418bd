pub const QUERY_CREATE_PET_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS pet (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    species TEXT NOT NULL DEFAULT '',
    notes TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

pub const QUERY_CREATE_TASK_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS task (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pet_id INTEGER NOT NULL REFERENCES pet(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    category TEXT NOT NULL DEFAULT 'other',
    due_at TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    notes TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

pub const QUERY_GET_ALL_PETS: &str = r#"
SELECT
    id,name,species,notes,created_at,updated_at
FROM pet;
"#;

pub const QUERY_GET_PET_BY_ID: &str = r#"
SELECT
    id,name,species,notes,created_at,updated_at
FROM pet
WHERE id=$1;
"#;

pub const QUERY_INSERT_PET: &str = r#"
INSERT INTO pet (
    name,species,notes,created_at,updated_at
) VALUES($1,$2,$3,$4,$5)
RETURNING id,name,species,notes,created_at,updated_at;
"#;

pub const QUERY_UPDATE_PET: &str = r#"
UPDATE pet
    SET name = $2,
    species = $3,
    notes = $4,
    updated_at = $5
WHERE id = $1;
"#;

pub const QUERY_DELETE_TASKS_OF_PET: &str = r#"DELETE FROM task WHERE pet_id=$1;"#;

pub const QUERY_DELETE_PET: &str = r#"DELETE FROM pet WHERE id=$1;"#;

pub const QUERY_GET_TASKS: &str = r#"
SELECT
    id,pet_id,title,category,due_at,status,notes,created_at,updated_at
FROM task
ORDER BY due_at ASC;
"#;

pub const QUERY_GET_TASKS_IN_DUE_RANGE: &str = r#"
SELECT
    id,pet_id,title,category,due_at,status,notes,created_at,updated_at
FROM task
WHERE due_at >= $1 AND due_at <= $2
ORDER BY due_at ASC;
"#;

pub const QUERY_GET_TASK_BY_ID: &str = r#"
SELECT
    id,pet_id,title,category,due_at,status,notes,created_at,updated_at
FROM task
WHERE id=$1;
"#;

pub const QUERY_INSERT_TASK: &str = r#"
INSERT INTO task (
    pet_id,title,category,due_at,status,notes,
    created_at,updated_at
) VALUES(
    $1,$2,$3,$4,$5,$6,
    $7,$8
)
RETURNING id,pet_id,title,category,due_at,status,notes,created_at,updated_at;
"#;

pub const QUERY_UPDATE_TASK: &str = r#"
UPDATE task
    SET title = $2,
    category = $3,
    due_at = $4,
    notes = $5,
    updated_at = $6
WHERE id = $1;
"#;

pub const QUERY_DELETE_TASK: &str = r#"DELETE FROM task WHERE id=$1;"#;

pub const QUERY_SET_TASK_STATUS: &str = r#"
UPDATE task SET status=$2,updated_at=$3 WHERE id=$1;
"#;
