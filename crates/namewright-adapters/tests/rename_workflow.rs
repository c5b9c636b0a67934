//! End-to-end renaming runs against the local and in-memory filesystems.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use namewright_adapters::{LocalFilesystem, MemoryFilesystem};
use namewright_core::prelude::*;
use tempfile::TempDir;

const ROUTER: &str = "import { createRouter, createWebHistory } from 'vue-router'\n\
                      \n\
                      const routes = [\n\
                      \x20 { path: '/', component: () => import('@/components/userProfile/userCard.vue') },\n\
                      \x20 { path: '/about', component: () => import('@/views/AboutView.vue') },\n\
                      ]\n";

fn pascal_kebab(use_setup_service: bool) -> RenameConfiguration {
    RenameConfiguration {
        file_naming_style: NamingStyle::PascalCase,
        folder_naming_style: NamingStyle::KebabCase,
        use_setup_service,
    }
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn scaffold(root: &Path) {
    write(root, "package.json", "{ \"name\": \"demo\" }\n");
    write(
        root,
        "src/components/UserProfile/userCard.vue",
        "<script setup lang=\"ts\">\n\
         import Avatar from './AvatarGroup/avatar-image.vue';\n\
         import UserCardSetupService from '@/setup/UserProfile/user-card-setup-service';\n\
         </script>\n",
    );
    write(
        root,
        "src/components/UserProfile/AvatarGroup/avatar-image.vue",
        "<template><img /></template>\n",
    );
    write(root, "src/components/AppHeader.vue", "<template><header /></template>\n");
    write(
        root,
        "src/setup/UserProfile/user-card-setup-service.ts",
        "export default class UserCardSetupService {}\n",
    );
    write(root, "src/router/index.ts", ROUTER);
}

#[tokio::test]
async fn renames_components_and_rewrites_references_on_disk() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    scaffold(root);

    let service = NamingStyleService::new(Arc::new(LocalFilesystem::new()));
    let layout = ProjectLayout::new(root);
    service.check_layout(&layout, true).await.unwrap();

    let report = service.run(&layout, &pascal_kebab(true)).await.unwrap();

    let card = root.join("src/components/user-profile/UserCard.vue");
    assert!(card.is_file());
    assert!(!root.join("src/components/UserProfile").exists());
    assert!(
        root.join("src/components/user-profile/avatar-group/AvatarImage.vue")
            .is_file()
    );
    assert!(
        root.join("src/setup/user-profile/UserCardSetupService.ts")
            .is_file()
    );

    let card_source = fs::read_to_string(&card).unwrap();
    assert!(card_source.contains("import Avatar from './avatar-group/AvatarImage.vue';"));
    assert!(card_source.contains(
        "import UserCardSetupService from '@/setup/user-profile/UserCardSetupService';"
    ));

    let router = fs::read_to_string(root.join("src/router/index.ts")).unwrap();
    assert!(router.contains("import('@/components/user-profile/UserCard.vue')"));
    assert!(router.contains("import('@/views/AboutView.vue')"));
    assert!(report.router_updated);
    assert!(report.rewritten_files.contains(&card));
}

#[cfg(unix)]
#[tokio::test]
async fn symlinked_directory_in_components_does_not_stop_the_run() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    scaffold(root);
    write(root, "src/shared/format-date.ts", "export {}\n");
    std::os::unix::fs::symlink(root.join("src/shared"), root.join("src/components/sharedLink"))
        .unwrap();

    let service = NamingStyleService::new(Arc::new(LocalFilesystem::new()));
    let report = service
        .run(&ProjectLayout::new(root), &pascal_kebab(true))
        .await
        .unwrap();

    let link = root.join("src/components/SharedLink");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert!(!report.rewritten_files.contains(&link));
    assert!(root.join("src/shared/format-date.ts").is_file());

    let card = fs::read_to_string(root.join("src/components/user-profile/UserCard.vue")).unwrap();
    assert!(card.contains("'@/setup/user-profile/UserCardSetupService'"));

    let router = fs::read_to_string(root.join("src/router/index.ts")).unwrap();
    assert!(router.contains("import('@/components/user-profile/UserCard.vue')"));
    assert!(report.router_updated);
}

#[tokio::test]
async fn every_descendant_reachable_after_deep_rename() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("components");
    let originals = [
        "LevelOne/levelTwo/LevelThree/deepWidget.vue",
        "LevelOne/levelTwo/LevelThree/other-widget.vue",
        "LevelOne/levelTwo/siblingWidget.vue",
        "LevelOne/LevelTwoB/leafWidget.vue",
        "LevelOne/topWidget.vue",
    ];
    for relative in originals {
        write(&root, relative, "<template />\n");
    }

    let filesystem: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let config = pascal_kebab(false);
    let plan = PathPlanner::new(Arc::clone(&filesystem))
        .plan(&root, &config)
        .await
        .unwrap();
    assert_eq!(plan.len(), 9);

    TreeRenamer::new(filesystem).apply(&plan).await.unwrap();

    for relative in originals {
        let expected = config.format_module_path(relative);
        assert!(
            root.join(&expected).is_file(),
            "{relative} should now live at {expected}"
        );
    }
    assert!(root.join("level-one/level-two/level-three").is_dir());
    assert!(root.join("level-one/level-two-b").is_dir());
}

#[tokio::test]
async fn conforming_entries_are_left_untouched() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("components");
    write(&root, "shared/AppButton.vue", "<template><button /></template>\n");
    write(&root, "shared/appInput.vue", "<template><input /></template>\n");

    let conforming = root.join("shared/AppButton.vue");
    let before: SystemTime = fs::metadata(&conforming).unwrap().modified().unwrap();

    let filesystem: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let config = pascal_kebab(false);
    let plan = PathPlanner::new(Arc::clone(&filesystem))
        .plan(&root, &config)
        .await
        .unwrap();
    let renamed = TreeRenamer::new(Arc::clone(&filesystem))
        .apply(&plan)
        .await
        .unwrap();
    ReferenceRewriter::new(filesystem)
        .rewrite_subtree(&root, &config)
        .await
        .unwrap();

    assert_eq!(renamed.len(), 1);
    assert_eq!(renamed[0].new_path, root.join("shared/AppInput.vue"));
    assert_eq!(fs::metadata(&conforming).unwrap().modified().unwrap(), before);
}

#[tokio::test]
async fn memory_run_issues_renames_files_first_then_deepest_directories() {
    let memory = MemoryFilesystem::new();
    memory.add_file("/p/package.json", "{}");
    memory.add_file("/p/src/components/UserProfile/AvatarGroup/avatar.vue", "");
    memory.add_file(
        "/p/src/components/UserProfile/userCard.vue",
        "import Avatar from './AvatarGroup/avatar.vue'\n",
    );
    memory.add_dir("/p/src/views");
    memory.add_file(
        "/p/src/router/index.ts",
        "const A = () => import('@/components/UserProfile/userCard.vue')\n",
    );

    let service = NamingStyleService::new(Arc::new(memory.clone()));
    let report = service
        .run(&ProjectLayout::new("/p"), &pascal_kebab(false))
        .await
        .unwrap();

    let renames: Vec<PathBuf> = memory.renames().into_iter().map(|(from, _)| from).collect();
    assert_eq!(renames.len(), 4);
    assert!(renames[..2].contains(&PathBuf::from("/p/src/components/UserProfile/userCard.vue")));
    assert!(renames[..2].contains(&PathBuf::from(
        "/p/src/components/UserProfile/AvatarGroup/avatar.vue"
    )));
    assert_eq!(
        renames[2..],
        [
            PathBuf::from("/p/src/components/UserProfile/AvatarGroup"),
            PathBuf::from("/p/src/components/UserProfile"),
        ]
    );
    assert_eq!(report.renamed_count(), 4);

    assert_eq!(
        memory
            .read_file(Path::new("/p/src/components/user-profile/UserCard.vue"))
            .as_deref(),
        Some("import Avatar from './avatar-group/Avatar.vue'\n")
    );
    assert_eq!(
        memory.read_file(Path::new("/p/src/router/index.ts")).as_deref(),
        Some("const A = () => import('@/components/user-profile/UserCard.vue')\n")
    );
}

#[tokio::test]
async fn collisions_abort_before_any_rename() {
    let memory = MemoryFilesystem::new();
    memory.add_file("/p/src/components/user-card.vue", "");
    memory.add_file("/p/src/components/userCard.vue", "");
    memory.add_dir("/p/src/views");

    let err = NamingStyleService::new(Arc::new(memory.clone()))
        .run(&ProjectLayout::new("/p"), &pascal_kebab(false))
        .await
        .unwrap_err();

    assert!(matches!(err, NamewrightError::Domain(_)));
    assert!(memory.renames().is_empty());
}
