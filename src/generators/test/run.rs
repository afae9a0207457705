use super::*;
use std::fs;

/// Tests the built-in registry.
///
/// Expected: role_enum then channel_enum
#[test]
fn registers_roles_before_channels() -> Result<(), RegistryError> {
    assert_eq!(registry()?.names(), vec![role_enum::NAME, channel_enum::NAME]);

    Ok(())
}

/// Tests registering the built-in generators into a registry that already holds them.
///
/// Verifies that the rejection is returned rather than raised as a panic and that it
/// converts into the top-level error.
///
/// Expected: Err(RegistryError::DuplicateName) for role_enum
#[test]
fn registering_built_ins_twice_fails() -> Result<(), RegistryError> {
    let mut registry = registry()?;

    let err = register_all(&mut registry).expect_err("built-ins are already registered");

    assert!(matches!(err, RegistryError::DuplicateName(ref name) if name == role_enum::NAME));
    assert!(matches!(AppError::from(err), AppError::RegistryErr(_)));
    assert_eq!(registry.len(), 2);

    Ok(())
}

/// Tests a full run of the built-in generators against a fake directory.
///
/// Verifies that both files are written under the output directory, start with the
/// generated-file header, and parse as Rust.
///
/// Expected: role and channel files with the reference entities
#[tokio::test]
async fn writes_role_and_channel_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let directory = FakeDirectory::new()
        .with_roles(
            GUILD_ID,
            vec![
                role(1, GUILD_ID, "Admin", 10, false),
                role(2, GUILD_ID, "Mod", 5, false),
                role(3, GUILD_ID, "Bot", 1, true),
            ],
        )
        .with_channels(
            GUILD_ID,
            vec![
                channel(1, GUILD_ID, "General", ChannelKind::Category, None, 0),
                channel(10, GUILD_ID, "chat", ChannelKind::Text, Some(1), 0),
            ],
        );
    let guild_ids = [GUILD_ID];
    let context = GeneratorContext {
        directory: &directory,
        guild_ids: &guild_ids,
        output_dir: dir.path(),
    };

    let report = run_all(&registry()?, &context).await?;

    assert_eq!(report.files.len(), 2);

    let roles = fs::read_to_string(dir.path().join(role_enum::OUTPUT_PATH))?;
    assert!(roles.starts_with(crate::generators::GENERATED_FILE_HEADER));
    assert_eq!(const_names(&roles), vec!["RoleAdmin", "RoleMod", "ROLE_IDS"]);

    let channels = fs::read_to_string(dir.path().join(channel_enum::OUTPUT_PATH))?;
    assert!(channels.starts_with(crate::generators::GENERATED_FILE_HEADER));
    assert_eq!(channels.matches("(GuildChannelChat, 1)").count(), 1);

    assert_eq!(
        directory.calls(),
        vec![("roles", GUILD_ID), ("channels", GUILD_ID)]
    );

    Ok(())
}

/// Tests a run where two roles collide.
///
/// Verifies that the role generator fails during render and the channel generator
/// never fetches.
///
/// Expected: Err(RunError) for role_enum
#[tokio::test]
async fn collision_stops_the_run() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let directory = FakeDirectory::new().with_roles(
        GUILD_ID,
        vec![
            role(1, GUILD_ID, "Helper", 2, false),
            role(2, GUILD_ID, "helper", 1, false),
        ],
    );
    let guild_ids = [GUILD_ID];
    let context = GeneratorContext {
        directory: &directory,
        guild_ids: &guild_ids,
        output_dir: dir.path(),
    };

    let err = run_all(&registry()?, &context)
        .await
        .expect_err("collision should fail the run");

    assert_eq!(err.definition, role_enum::NAME);
    assert_eq!(err.source.step(), "render");
    assert_eq!(directory.calls(), vec![("roles", GUILD_ID)]);
    assert!(!dir.path().join(role_enum::OUTPUT_PATH).exists());

    Ok(())
}
