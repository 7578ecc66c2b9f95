#[cfg(feature = "protected")]
mod common;

#[cfg(feature = "protected")]
mod protected {
    use super::common::{init, random_name};
    use dropfromshell::entry::Tag;
    use dropfromshell::{Client, ClientBuilder};
    use std::path::PathBuf;
    use temp_dir::TempDir;

    fn create_client() -> Client {
        ClientBuilder::from_env().build().unwrap()
    }

    fn create_local_file(root: &TempDir) -> PathBuf {
        let path = root.child(format!("TestDropFromShell_{}", random_name()));
        std::fs::write(&path, random_name()).unwrap();
        path
    }

    #[tokio::test]
    async fn make_and_delete_dir() {
        init();
        let client = create_client();
        let folder = format!("/testdropfromshell{}", random_name());

        assert!(client.create_folder(&folder).await.unwrap());
        assert!(!client.create_folder(&folder).await.unwrap());
        assert_eq!(client.get_tag(&folder).await.unwrap(), Some(Tag::Folder));
        assert!(
            client.delete(&folder).await.unwrap(),
            "please delete remote folder manually: {folder}"
        );
        assert_eq!(client.get_tag(&folder).await.unwrap(), None);
    }

    #[tokio::test]
    async fn upload_and_download() {
        init();
        let client = create_client();
        let root = TempDir::new().unwrap();
        let source = create_local_file(&root);
        let target = root.child("downloaded");
        let remote = format!("/testdropfromshell{}.txt", random_name());

        client.upload_file(&source, &remote).await.unwrap();
        client.download_file(&remote, &target).await.unwrap();
        assert_eq!(
            std::fs::read(&source).unwrap(),
            std::fs::read(&target).unwrap()
        );
        assert!(
            client.delete(&remote).await.unwrap(),
            "please delete remote file manually: {remote}"
        );
    }

    #[tokio::test]
    async fn move_file() {
        init();
        let client = create_client();
        let root = TempDir::new().unwrap();
        let source = create_local_file(&root);
        let remote_a = format!("/testdropfromshellA_{}.txt", random_name());
        let remote_b = format!("/testdropfromshellB_{}.txt", random_name());

        client.upload_file(&source, &remote_a).await.unwrap();
        client.move_entry(&remote_a, &remote_b).await.unwrap();

        assert!(
            !client.delete(&remote_a).await.unwrap(),
            "deleted {remote_a} but this file shouldn't have existed"
        );
        assert!(
            client.delete(&remote_b).await.unwrap(),
            "please delete remote file manually: {remote_b}"
        );
    }
}
